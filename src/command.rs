//! Validating command builders.
//!
//! The reducer trusts its caller for every invariant (positive amounts,
//! valid day ranges, budget de-duplication). These builders centralize that
//! checking in one place: each validates its inputs and returns a ready
//! [`TrackerAction`], so screens never hand-assemble payloads.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    domain::{Budget, RecurringPayment, TrackerState, Transaction, TransactionKind},
    errors::CommandError,
    reducer::TrackerAction,
};

/// Mints a fresh opaque id for a new row.
pub fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parses a user-typed amount string. Rejects anything that is not a
/// finite positive number.
pub fn parse_amount(input: &str) -> Result<f64, CommandError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(CommandError::InvalidAmount)
}

fn require_text(value: &str, field: &'static str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn require_amount(value: f64) -> Result<(), CommandError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CommandError::InvalidAmount)
    }
}

/// Builds a [`TrackerAction::AddTransaction`] with a minted id.
pub fn add_transaction(
    kind: TransactionKind,
    amount: f64,
    description: &str,
    category: &str,
    date: NaiveDate,
) -> Result<TrackerAction, CommandError> {
    require_amount(amount)?;
    require_text(description, "description")?;
    require_text(category, "category")?;
    Ok(TrackerAction::AddTransaction(Transaction::new(
        mint_id(),
        kind,
        amount,
        description.trim(),
        category.trim(),
        date,
    )))
}

/// Builds the budget action for a `(category, month, year)` period.
///
/// When a budget already covers the period the result is an
/// [`TrackerAction::UpdateBudget`] keeping the existing id and spent total
/// with the new limit; otherwise an [`TrackerAction::AddBudget`] with a
/// fresh id and zero spent. This lookup is what keeps duplicate budgets out
/// in practice; the reducer itself never de-duplicates.
pub fn upsert_budget(
    state: &TrackerState,
    category: &str,
    limit: f64,
    month: u32,
    year: i32,
) -> Result<TrackerAction, CommandError> {
    require_text(category, "category")?;
    if !(limit.is_finite() && limit > 0.0) {
        return Err(CommandError::InvalidLimit);
    }
    if month > 11 {
        return Err(CommandError::MonthOutOfRange(month));
    }
    let category = category.trim();
    if let Some(existing) = state.budgets.iter().find(|b| b.covers(category, month, year)) {
        let mut updated = existing.clone();
        updated.limit = limit;
        Ok(TrackerAction::UpdateBudget(updated))
    } else {
        Ok(TrackerAction::AddBudget(Budget::new(
            mint_id(),
            category,
            limit,
            0.0,
            month,
            year,
        )))
    }
}

/// Builds a [`TrackerAction::AddRecurringPayment`]. The payment starts
/// active. Days 29-31 are rejected so every month has the scheduled day.
pub fn add_recurring_payment(
    name: &str,
    amount: f64,
    day_of_month: u32,
    category: &str,
) -> Result<TrackerAction, CommandError> {
    require_text(name, "name")?;
    require_amount(amount)?;
    if !(1..=28).contains(&day_of_month) {
        return Err(CommandError::DayOutOfRange(day_of_month));
    }
    require_text(category, "category")?;
    Ok(TrackerAction::AddRecurringPayment(RecurringPayment::new(
        mint_id(),
        name.trim(),
        amount,
        day_of_month,
        category.trim(),
    )))
}

/// Flips a payment's active flag via wholesale replacement. Unlike the
/// reducer, the builder must find the current row, so an unknown id is an
/// error here.
pub fn toggle_recurring_payment(
    state: &TrackerState,
    id: &str,
) -> Result<TrackerAction, CommandError> {
    let payment = state
        .recurring_payment(id)
        .ok_or_else(|| CommandError::UnknownRecurringPayment(id.to_string()))?;
    Ok(TrackerAction::UpdateRecurringPayment(payment.toggled()))
}

/// Builds a [`TrackerAction::SetMonthlyBudgetLimit`] from a validated value.
pub fn set_monthly_budget_limit(value: f64) -> Result<TrackerAction, CommandError> {
    if value.is_finite() && value > 0.0 {
        Ok(TrackerAction::SetMonthlyBudgetLimit(value))
    } else {
        Err(CommandError::InvalidLimit)
    }
}
