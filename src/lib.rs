#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the finance-tracker domain model that powers the
//! expense/income dashboard: a pure reducer over transactions, budgets, and
//! recurring payments, derived chart aggregates, and JSON snapshot
//! persistence.

pub mod clock;
pub mod command;
pub mod domain;
pub mod errors;
pub mod reducer;
pub mod storage;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
