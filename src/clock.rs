use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current date so "current month" views stay
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the system local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        let now: DateTime<Local> = Local::now();
        now.date_naive()
    }
}

/// Clock pinned to one date, for tests and reproducible snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
