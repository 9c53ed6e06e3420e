//! The shared state owner.
//!
//! [`TrackerStore`] replaces the ambient global context of the original
//! design with an explicit object handed to each consumer: it owns the
//! state tree, routes every mutation through the reducer, persists the
//! full snapshot after each transition, and rehydrates at open.

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    domain::{TrackerState, Transaction, TransactionKind},
    errors::StorageError,
    reducer::{reduce, TrackerAction},
    storage::StateStore,
    views,
};

pub struct TrackerStore<S: StateStore, C: Clock> {
    state: TrackerState,
    storage: S,
    clock: C,
}

impl<S: StateStore, C: Clock> TrackerStore<S, C> {
    /// Opens the store: starts from the seeded sample state, then replaces
    /// it with the persisted snapshot when one loads cleanly.
    ///
    /// A missing snapshot keeps the seed; a snapshot that fails to read is
    /// logged and also keeps the seed, so rehydration never fails the
    /// caller.
    pub fn open(storage: S, clock: C) -> Self {
        let mut state = TrackerState::seeded();
        match storage.load() {
            Ok(Some(persisted)) => {
                state = reduce(&state, TrackerAction::SetState(persisted));
            }
            Ok(None) => {
                tracing::debug!("no persisted tracker state, keeping seed data");
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load tracker state, keeping seed data");
            }
        }
        Self {
            state,
            storage,
            clock,
        }
    }

    /// Read-only view of the current state tree.
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Applies one action and persists the resulting snapshot.
    ///
    /// The transition always takes effect in memory. An `Err` only means
    /// the post-transition save failed (already logged at `warn`); callers
    /// may surface it as a non-fatal notification or ignore it. Failed
    /// saves are not retried; the next successful save supersedes them.
    pub fn dispatch(&mut self, action: TrackerAction) -> Result<(), StorageError> {
        self.state = reduce(&self.state, action);
        if let Err(err) = self.storage.save(&self.state) {
            tracing::warn!(error = %err, "failed to persist tracker state");
            return Err(err);
        }
        Ok(())
    }

    /// Today according to the store's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_month_expenses(&self) -> f64 {
        views::month_expenses(&self.state, self.today())
    }

    pub fn current_month_income(&self) -> f64 {
        views::month_income(&self.state, self.today())
    }

    pub fn net_balance(&self) -> f64 {
        views::net_balance(&self.state, self.today())
    }

    pub fn monthly_5day_buckets(&self) -> [f64; views::MONTH_BUCKETS] {
        views::monthly_5day_buckets(&self.state, self.today())
    }

    pub fn yearly_monthly_totals(&self) -> [f64; 12] {
        views::yearly_monthly_totals(&self.state, self.today())
    }

    pub fn budget_usage_ratio(&self) -> f64 {
        views::budget_usage_ratio(&self.state, self.today())
    }

    pub fn sorted_transactions(&self, kind: TransactionKind) -> Vec<&Transaction> {
        views::sorted_transactions(&self.state, kind)
    }
}
