use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded money movement.
///
/// Ids are caller-assigned opaque strings; the reducer never verifies
/// uniqueness. Dates carry day granularity only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub category: String,
    #[serde(with = "iso_day")]
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }
}

/// Whether a transaction moves money out (expense) or in (income).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        };
        f.write_str(label)
    }
}

/// Serde adapter for transaction dates.
///
/// Serializes as plain ISO-8601 day strings (`2025-09-20`). Deserialization
/// also accepts full ISO-8601 timestamps by truncating at `T`, because older
/// snapshots stored whole instants; only the calendar day is meaningful.
pub mod iso_day {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const DAY_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DAY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let day_part = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(day_part, DAY_FORMAT).map_err(serde::de::Error::custom)
    }
}
