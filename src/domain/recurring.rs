use serde::{Deserialize, Serialize};

/// A scheduled monthly obligation, not tied to a transaction record until
/// realized.
///
/// `day_of_month` is kept in `1..=28` by the command layer so every month
/// has the scheduled day; the reducer stores whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayment {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub day_of_month: u32,
    pub category: String,
    pub is_active: bool,
}

impl RecurringPayment {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        day_of_month: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            day_of_month,
            category: category.into(),
            is_active: true,
        }
    }

    /// Returns a copy with `is_active` flipped, for wholesale replacement.
    pub fn toggled(&self) -> Self {
        let mut next = self.clone();
        next.is_active = !next.is_active;
        next
    }
}
