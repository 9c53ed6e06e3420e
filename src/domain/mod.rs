//! Tracker domain models: persistence-friendly types and the aggregate root.

pub mod budget;
pub mod recurring;
pub mod state;
pub mod transaction;

pub use budget::Budget;
pub use recurring::RecurringPayment;
pub use state::{SortKey, SortOrder, SortPreferences, TrackerState};
pub use transaction::{Transaction, TransactionKind};
