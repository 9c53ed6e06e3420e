use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    budget::Budget,
    recurring::RecurringPayment,
    transaction::{Transaction, TransactionKind},
};

/// The aggregate root owned by the reducer.
///
/// All mutation happens by replacing the whole tree through reducer actions.
/// Every collection is `#[serde(default)]` so older snapshots missing a key
/// still rehydrate instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub recurring_payments: Vec<RecurringPayment>,
    pub monthly_budget_limit: f64,
    #[serde(default)]
    pub sort_preferences: SortPreferences,
}

impl TrackerState {
    /// Empty state with the given overall monthly ceiling.
    pub fn empty(monthly_budget_limit: f64) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            recurring_payments: Vec::new(),
            monthly_budget_limit,
            sort_preferences: SortPreferences::default(),
        }
    }

    /// The sample data a fresh install starts with, used until a persisted
    /// snapshot is found.
    pub fn seeded() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        Self {
            transactions: vec![
                Transaction::new(
                    "1",
                    TransactionKind::Expense,
                    50.00,
                    "Groceries",
                    "Food",
                    date(2025, 9, 20),
                ),
                Transaction::new(
                    "2",
                    TransactionKind::Expense,
                    89.50,
                    "Gas",
                    "Transport",
                    date(2025, 9, 22),
                ),
                Transaction::new(
                    "3",
                    TransactionKind::Expense,
                    100.00,
                    "Shopping",
                    "Entertainment",
                    date(2025, 9, 24),
                ),
                Transaction::new(
                    "4",
                    TransactionKind::Income,
                    200.00,
                    "Part-time job",
                    "Work",
                    date(2025, 9, 21),
                ),
                Transaction::new(
                    "5",
                    TransactionKind::Income,
                    200.00,
                    "Freelance",
                    "Work",
                    date(2025, 9, 15),
                ),
            ],
            budgets: vec![
                Budget::new("1", "Food", 200.0, 50.0, 8, 2025),
                Budget::new("2", "Transport", 150.0, 89.50, 8, 2025),
            ],
            recurring_payments: vec![RecurringPayment::new(
                "1",
                "Spotify Premium",
                17.90,
                7,
                "Entertainment",
            )],
            monthly_budget_limit: 600.00,
            sort_preferences: SortPreferences::default(),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn recurring_payment(&self, id: &str) -> Option<&RecurringPayment> {
        self.recurring_payments.iter().find(|payment| payment.id == id)
    }

    /// Current sort order for one of the two transaction lists.
    pub fn sort_order(&self, key: SortKey) -> SortOrder {
        match key {
            SortKey::Expenses => self.sort_preferences.expenses,
            SortKey::Income => self.sort_preferences.income,
        }
    }
}

/// Per-list ordering toggles, persisted alongside the domain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortPreferences {
    #[serde(default)]
    pub expenses: SortOrder,
    #[serde(default)]
    pub income: SortOrder,
}

/// Which transaction list a sort preference applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Expenses,
    Income,
}

/// Display ordering for a transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}
