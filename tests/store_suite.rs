use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;
use tracker_core::{
    clock::FixedClock,
    command,
    domain::{SortKey, SortOrder, TrackerState, TransactionKind},
    reducer::TrackerAction,
    storage::JsonStateStore,
    store::TrackerStore,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn september() -> FixedClock {
    FixedClock(date(2025, 9, 28))
}

fn open_store(temp: &tempfile::TempDir) -> TrackerStore<JsonStateStore, FixedClock> {
    let storage = JsonStateStore::new(Some(temp.path().to_path_buf())).expect("json store");
    TrackerStore::open(storage, september())
}

#[test]
fn open_without_snapshot_keeps_seed_data() {
    let temp = tempdir().unwrap();
    let store = open_store(&temp);
    assert_eq!(store.state(), &TrackerState::seeded());
}

#[test]
fn open_rehydrates_persisted_snapshot() {
    let temp = tempdir().unwrap();
    {
        let mut store = open_store(&temp);
        store
            .dispatch(TrackerAction::SetMonthlyBudgetLimit(975.0))
            .expect("persist");
    }
    let reopened = open_store(&temp);
    assert_eq!(reopened.state().monthly_budget_limit, 975.0);
    assert_eq!(
        reopened.state().transaction_count(),
        5,
        "seed transactions came back from the snapshot"
    );
}

#[test]
fn open_with_corrupt_snapshot_falls_back_to_seed() {
    let temp = tempdir().unwrap();
    let storage = JsonStateStore::new(Some(temp.path().to_path_buf())).expect("json store");
    fs::write(storage.state_path(), "{ broken").expect("write garbage");
    let store = TrackerStore::open(storage, september());
    assert_eq!(
        store.state(),
        &TrackerState::seeded(),
        "corrupt snapshot must not fail open"
    );
}

#[test]
fn add_expense_flows_into_current_month_total() {
    // End-to-end scenario: a September expense lands in the September sum
    // alongside the pre-seeded September expenses (50 + 89.5 + 100).
    let temp = tempdir().unwrap();
    let mut store = open_store(&temp);
    let before = store.current_month_expenses();
    assert_eq!(before, 239.5);

    let action = command::add_transaction(
        TransactionKind::Expense,
        50.0,
        "Groceries",
        "Food",
        date(2025, 9, 20),
    )
    .expect("valid command");
    store.dispatch(action).expect("persist");

    assert_eq!(store.current_month_expenses(), before + 50.0);
}

#[test]
fn sort_toggle_reorders_expense_listing() {
    let temp = tempdir().unwrap();
    let mut store = open_store(&temp);

    store
        .dispatch(TrackerAction::SetSortPreference {
            key: SortKey::Expenses,
            value: SortOrder::Oldest,
        })
        .expect("persist");

    let dates: Vec<NaiveDate> = store
        .sorted_transactions(TransactionKind::Expense)
        .iter()
        .map(|t| t.date)
        .collect();
    let mut ascending = dates.clone();
    ascending.sort();
    assert_eq!(dates, ascending, "oldest preference yields ascending dates");
}

#[test]
fn derived_accessors_use_the_injected_clock() {
    let temp = tempdir().unwrap();
    let storage = JsonStateStore::new(Some(temp.path().to_path_buf())).expect("json store");
    // October clock: the seeded September activity is out of scope.
    let store = TrackerStore::open(storage, FixedClock(date(2025, 10, 5)));
    assert_eq!(store.current_month_expenses(), 0.0);
    assert_eq!(store.current_month_income(), 0.0);
    assert_eq!(store.net_balance(), 0.0);
    // ...but the yearly chart still sees the September expenses at index 8.
    assert_eq!(store.yearly_monthly_totals()[8], 239.5);
}

#[test]
fn dashboard_aggregates_match_seed_data() {
    let temp = tempdir().unwrap();
    let store = open_store(&temp);
    assert_eq!(store.current_month_income(), 400.0);
    assert_eq!(store.net_balance(), 400.0 - 239.5);
    // 239.5 of the 600.0 ceiling.
    let ratio = store.budget_usage_ratio();
    assert!((ratio - 239.5 / 600.0).abs() < 1e-9, "got {ratio}");
    // Seed expenses on the 20th, 22nd and 24th all sit in the 16-20 and
    // 21-25 windows.
    let buckets = store.monthly_5day_buckets();
    assert_eq!(buckets[3], 50.0);
    assert_eq!(buckets[4], 189.5);
}

#[test]
fn failed_save_still_applies_the_transition() {
    let temp = tempdir().unwrap();
    let storage = JsonStateStore::new(Some(temp.path().to_path_buf())).expect("json store");
    // Collide the staging path with a directory so every save fails.
    fs::create_dir_all(storage.state_path().with_extension("json.tmp")).unwrap();
    let mut store = TrackerStore::open(storage, september());

    let result = store.dispatch(TrackerAction::SetMonthlyBudgetLimit(42.0));
    assert!(result.is_err(), "save should fail");
    assert_eq!(
        store.state().monthly_budget_limit,
        42.0,
        "in-memory state stays authoritative"
    );
}
