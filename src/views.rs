//! Derived-view computations over a [`TrackerState`] snapshot.
//!
//! Pure read-only aggregates backing the dashboard charts and summaries.
//! "Current month" functions take the reference date explicitly; the store
//! supplies `clock.today()` so tests stay deterministic.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Budget, SortKey, SortOrder, TrackerState, Transaction, TransactionKind};

/// Number of 5-day windows a month is split into for the monthly chart.
pub const MONTH_BUCKETS: usize = 6;

fn month_total(state: &TrackerState, kind: TransactionKind, today: NaiveDate) -> f64 {
    state
        .transactions
        .iter()
        .filter(|t| {
            t.kind == kind && t.date.month0() == today.month0() && t.date.year() == today.year()
        })
        .map(|t| t.amount)
        .sum()
}

/// Sum of expense amounts in the reference date's calendar month.
pub fn month_expenses(state: &TrackerState, today: NaiveDate) -> f64 {
    month_total(state, TransactionKind::Expense, today)
}

/// Sum of income amounts in the reference date's calendar month.
pub fn month_income(state: &TrackerState, today: NaiveDate) -> f64 {
    month_total(state, TransactionKind::Income, today)
}

/// Month income minus month expenses; sign drives the positive/negative
/// balance styling.
pub fn net_balance(state: &TrackerState, today: NaiveDate) -> f64 {
    month_income(state, today) - month_expenses(state, today)
}

/// Expense totals for the reference month, split into six 5-day windows
/// (days 1-5, 6-10, ... 26-30).
///
/// The day is clamped to `1..=30` before bucketing, so the 31st contributes
/// to the final window rather than gaining a seventh bucket. Preserved
/// behavior; see DESIGN.md.
pub fn monthly_5day_buckets(state: &TrackerState, reference: NaiveDate) -> [f64; MONTH_BUCKETS] {
    let mut buckets = [0.0; MONTH_BUCKETS];
    for t in &state.transactions {
        if t.kind != TransactionKind::Expense {
            continue;
        }
        if t.date.month0() == reference.month0() && t.date.year() == reference.year() {
            let day = t.date.day().clamp(1, 30);
            buckets[(day as usize - 1) / 5] += t.amount;
        }
    }
    buckets
}

/// Expense totals per 0-based month index for the reference year.
pub fn yearly_monthly_totals(state: &TrackerState, reference: NaiveDate) -> [f64; 12] {
    let mut totals = [0.0; 12];
    for t in &state.transactions {
        if t.kind == TransactionKind::Expense && t.date.year() == reference.year() {
            totals[t.date.month0() as usize] += t.amount;
        }
    }
    totals
}

/// Fraction of the overall monthly ceiling consumed by this month's
/// expenses, capped at `1.0`.
///
/// A non-positive limit reads as fully consumed (`1.0`) so a zero ceiling
/// sizes the progress bar to full instead of producing NaN.
pub fn budget_usage_ratio(state: &TrackerState, today: NaiveDate) -> f64 {
    if state.monthly_budget_limit <= 0.0 {
        return 1.0;
    }
    (month_expenses(state, today) / state.monthly_budget_limit).min(1.0)
}

/// Per-budget `spent / limit`, capped at `1.0`, with the same zero-limit
/// policy as [`budget_usage_ratio`].
pub fn budget_fill_ratio(budget: &Budget) -> f64 {
    if budget.limit <= 0.0 {
        return 1.0;
    }
    (budget.spent / budget.limit).min(1.0)
}

/// Transactions of one kind, ordered by date according to the persisted
/// sort preference for that list. The sort is stable, so same-day entries
/// keep insertion order.
pub fn sorted_transactions(state: &TrackerState, kind: TransactionKind) -> Vec<&Transaction> {
    let key = match kind {
        TransactionKind::Expense => SortKey::Expenses,
        TransactionKind::Income => SortKey::Income,
    };
    let mut rows: Vec<&Transaction> = state
        .transactions
        .iter()
        .filter(|t| t.kind == kind)
        .collect();
    match state.sort_order(key) {
        SortOrder::Newest => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => rows.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    rows
}
