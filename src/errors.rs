use thiserror::Error;

/// Failures raised by the persistence adapter.
///
/// The store logs these and keeps the in-memory state authoritative; they
/// are surfaced so a caller may show a non-fatal notification.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Validation failures raised by the command builders before any action is
/// dispatched. The reducer itself never validates.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("limit must be a positive number")]
    InvalidLimit,
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("day of month must be between 1 and 28, got {0}")]
    DayOutOfRange(u32),
    #[error("month index must be between 0 and 11, got {0}")]
    MonthOutOfRange(u32),
    #[error("recurring payment not found: {0}")]
    UnknownRecurringPayment(String),
}
