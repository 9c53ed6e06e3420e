use serde::{Deserialize, Serialize};

/// A spending ceiling for one category in one month of one year.
///
/// `spent` is a denormalized running total maintained by callers; the
/// reducer never recomputes it. `month` is 0-based (January = 0) to match
/// the persisted wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        limit: f64,
        spent: f64,
        month: u32,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            limit,
            spent,
            month,
            year,
        }
    }

    /// True when this budget covers the given category in the given period.
    pub fn covers(&self, category: &str, month: u32, year: i32) -> bool {
        self.category == category && self.month == month && self.year == year
    }
}
