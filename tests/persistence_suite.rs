use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;
use tracker_core::{
    domain::{SortOrder, TrackerState, Transaction, TransactionKind},
    errors::StorageError,
    storage::{JsonStateStore, StateStore},
};

fn store_in(temp: &tempfile::TempDir) -> JsonStateStore {
    JsonStateStore::new(Some(temp.path().to_path_buf())).expect("json store")
}

#[test]
fn roundtrip_preserves_every_field() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);

    let mut state = TrackerState::seeded();
    state.transactions.push(Transaction::new(
        "extra",
        TransactionKind::Income,
        123.45,
        "Refund",
        "Misc",
        NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
    ));
    state.monthly_budget_limit = 725.0;
    state.sort_preferences.income = SortOrder::Oldest;

    store.save(&state).expect("save");
    let loaded = store.load().expect("load").expect("snapshot present");
    assert_eq!(loaded, state, "load(save(state)) must equal state");
}

#[test]
fn snapshot_uses_the_documented_wire_shape() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);
    store.save(&TrackerState::seeded()).expect("save");

    let raw = fs::read_to_string(store.state_path()).expect("read snapshot");
    for key in [
        r#""transactions""#,
        r#""budgets""#,
        r#""recurringPayments""#,
        r#""monthlyBudgetLimit""#,
        r#""sortPreferences""#,
        r#""dayOfMonth""#,
        r#""isActive""#,
        r#""type": "expense""#,
        r#""date": "2025-09-20""#,
    ] {
        assert!(raw.contains(key), "snapshot missing {key}: {raw}");
    }
}

#[test]
fn legacy_snapshot_with_timestamps_and_no_preferences_rehydrates() {
    // Shape an older snapshot: full ISO instants and no sortPreferences key.
    let temp = tempdir().unwrap();
    let store = store_in(&temp);
    let legacy = r#"{
        "transactions": [
            {
                "id": "1",
                "type": "expense",
                "amount": 50.0,
                "description": "Groceries",
                "category": "Food",
                "date": "2025-09-20T18:25:43.511Z"
            }
        ],
        "budgets": [],
        "recurringPayments": [],
        "monthlyBudgetLimit": 600.0
    }"#;
    fs::write(store.state_path(), legacy).expect("write legacy snapshot");

    let loaded = store.load().expect("load").expect("snapshot present");
    assert_eq!(
        loaded.transactions[0].date,
        NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
        "instant is truncated to its calendar day"
    );
    assert_eq!(loaded.sort_preferences.expenses, SortOrder::Newest);
}

#[test]
fn absent_snapshot_loads_as_none() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);
    assert!(store.load().expect("load").is_none());
}

#[test]
fn malformed_snapshot_is_a_serde_error() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);
    fs::write(store.state_path(), "][").expect("write garbage");
    match store.load() {
        Err(StorageError::Serde(_)) => {}
        other => panic!("expected Serde error, got {other:?}"),
    }
}

#[test]
fn failed_save_preserves_previous_snapshot() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);

    let state = TrackerState::seeded();
    store.save(&state).expect("initial save");
    let original = fs::read_to_string(store.state_path()).expect("read original");

    // Collide the staging path with a directory to force the write to fail.
    let tmp = store.state_path().with_extension("json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    let mut changed = state.clone();
    changed.monthly_budget_limit = 1.0;
    assert!(store.save(&changed).is_err(), "staged write should fail");

    let current = fs::read_to_string(store.state_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the existing snapshot"
    );
}

#[test]
fn save_replaces_whole_snapshot() {
    let temp = tempdir().unwrap();
    let store = store_in(&temp);

    store.save(&TrackerState::seeded()).expect("first save");
    let empty = TrackerState::empty(50.0);
    store.save(&empty).expect("second save");

    let loaded = store.load().expect("load").expect("snapshot present");
    assert_eq!(loaded, empty, "last write wins, no merging");
}
