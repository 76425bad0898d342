use predicates::str::contains;

use evman::db::kv::{KEY_CURRENT_USER, KEY_EVENT_LIST, kv_get, kv_set};
use evman::db::pool::DbPool;
use evman::models::event::Event;
use evman::models::events::EventList;

mod common;
use common::{evm, init_store_with_data, setup_test_store};

#[test]
fn test_state_survives_across_invocations() {
    let store = setup_test_store("bootstrap_restore");
    init_store_with_data(&store);

    // A fresh process restores both the session and the events
    evm()
        .args(["--db", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as alice (2 events)"));
}

#[test]
fn test_corrupt_event_list_falls_back_to_empty() {
    let store = setup_test_store("bootstrap_corrupt");
    init_store_with_data(&store);

    // Damage the stored snapshot behind the app's back
    let pool = DbPool::open(&store).expect("open store");
    kv_set(&pool, KEY_EVENT_LIST, "{not valid json").expect("write garbage");
    drop(pool);

    evm()
        .args(["--db", &store, "list"])
        .assert()
        .success()
        .stdout(contains("corrupt"))
        .stdout(contains("No events yet"));
}

#[test]
fn test_mutation_after_corruption_writes_clean_snapshot() {
    let store = setup_test_store("bootstrap_recover");
    init_store_with_data(&store);

    let pool = DbPool::open(&store).expect("open store");
    kv_set(&pool, KEY_EVENT_LIST, "]]]]").expect("write garbage");
    drop(pool);

    // The next write-through replaces the corrupt snapshot entirely
    evm()
        .args(["--db", &store, "add", "Fresh start"])
        .assert()
        .success();

    let pool = DbPool::open(&store).expect("reopen store");
    let raw = kv_get(&pool, KEY_EVENT_LIST)
        .expect("read snapshot")
        .expect("snapshot present");
    let list = EventList::from_json(&raw).expect("snapshot parses again");
    assert_eq!(list.len(), 1);
}

#[test]
fn test_restored_session_has_no_password() {
    let store = setup_test_store("bootstrap_password");

    evm()
        .args(["--db", &store, "login", "alice", "-p", "hunter2"])
        .assert()
        .success();

    // Only the username ever reaches the store
    let pool = DbPool::open(&store).expect("open store");
    let user = kv_get(&pool, KEY_CURRENT_USER).expect("read identity");
    assert_eq!(user.as_deref(), Some("alice"));

    let state = evman::core::bootstrap::Bootstrap::load(&pool).expect("bootstrap");
    assert!(state.session.is_logged_in);
    assert_eq!(state.session.username, "alice");
    assert_eq!(state.session.password, "");
}

#[test]
fn test_event_list_json_round_trip() {
    let events = vec![
        Event::new(1, "Standup", "Daily sync"),
        Event::new(2, "", ""),
        Event::new(7, "Retro", "Sprint retrospective"),
    ];
    let list = EventList::from_events(events);

    let json = list.to_json().expect("serialize");
    let back = EventList::from_json(&json).expect("parse");

    assert_eq!(back, list);
}
