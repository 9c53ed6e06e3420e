//! The pure state transition function and its action set.
//!
//! The reducer performs no I/O and signals no errors: unknown ids are
//! absorbed as no-ops and payload validation is the command layer's job
//! (see [`crate::command`]). Every transition returns a fresh tree and
//! leaves the input untouched.

use crate::domain::{
    Budget, RecurringPayment, SortKey, SortOrder, TrackerState, Transaction,
};

/// Typed commands dispatched into [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    /// Wholesale state replacement; used only for rehydration.
    SetState(TrackerState),
    AddTransaction(Transaction),
    /// Removes every transaction carrying the id.
    DeleteTransaction(String),
    AddBudget(Budget),
    /// Replaces the budget with the matching id; no-op when absent.
    UpdateBudget(Budget),
    DeleteBudget(String),
    AddRecurringPayment(RecurringPayment),
    /// Replaces the payment with the matching id; no-op when absent.
    UpdateRecurringPayment(RecurringPayment),
    SetMonthlyBudgetLimit(f64),
    SetSortPreference { key: SortKey, value: SortOrder },
}

/// Applies one action to a state snapshot, producing the next snapshot.
pub fn reduce(state: &TrackerState, action: TrackerAction) -> TrackerState {
    match action {
        TrackerAction::SetState(next) => next,
        TrackerAction::AddTransaction(transaction) => {
            let mut next = state.clone();
            next.transactions.push(transaction);
            next
        }
        TrackerAction::DeleteTransaction(id) => {
            let mut next = state.clone();
            next.transactions.retain(|t| t.id != id);
            next
        }
        TrackerAction::AddBudget(budget) => {
            let mut next = state.clone();
            next.budgets.push(budget);
            next
        }
        TrackerAction::UpdateBudget(budget) => {
            let mut next = state.clone();
            if let Some(slot) = next.budgets.iter_mut().find(|b| b.id == budget.id) {
                *slot = budget;
            }
            next
        }
        TrackerAction::DeleteBudget(id) => {
            let mut next = state.clone();
            next.budgets.retain(|b| b.id != id);
            next
        }
        TrackerAction::AddRecurringPayment(payment) => {
            let mut next = state.clone();
            next.recurring_payments.push(payment);
            next
        }
        TrackerAction::UpdateRecurringPayment(payment) => {
            let mut next = state.clone();
            if let Some(slot) = next
                .recurring_payments
                .iter_mut()
                .find(|p| p.id == payment.id)
            {
                *slot = payment;
            }
            next
        }
        TrackerAction::SetMonthlyBudgetLimit(limit) => {
            let mut next = state.clone();
            next.monthly_budget_limit = limit;
            next
        }
        TrackerAction::SetSortPreference { key, value } => {
            let mut next = state.clone();
            match key {
                SortKey::Expenses => next.sort_preferences.expenses = value,
                SortKey::Income => next.sort_preferences.income = value,
            }
            next
        }
    }
}
