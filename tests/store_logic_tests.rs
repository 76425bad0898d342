//! Direct library-level tests for the save/edit/delete contract,
//! against an in-memory store.

use evman::core::bootstrap::Bootstrap;
use evman::core::session::{LoginOutcome, SessionLogic};
use evman::core::state::AppState;
use evman::core::store::{SaveOutcome, StoreLogic};
use evman::db::initialize::init_store;
use evman::db::pool::DbPool;
use rusqlite::Connection;

fn mem_pool() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory store");
    init_store(&conn).expect("create schema");
    DbPool { conn }
}

fn add(pool: &DbPool, state: &mut AppState, name: &str, desc: &str) -> i64 {
    state.event_name = name.to_string();
    state.event_description = desc.to_string();
    StoreLogic::save(pool, state).expect("save").id()
}

#[test]
fn save_without_cursor_appends_with_fresh_id() {
    let pool = mem_pool();
    let mut state = AppState::new();

    let a = add(&pool, &mut state, "Standup", "Daily sync");
    let b = add(&pool, &mut state, "Retro", "");

    assert_eq!(state.events.len(), 2);
    assert_ne!(a, b);
    assert_eq!(state.events.iter().next().map(|e| e.id), Some(a));

    // Postcondition: buffers reset, no cursor
    assert_eq!(state.event_name, "");
    assert_eq!(state.event_description, "");
    assert_eq!(state.editing, None);
}

#[test]
fn save_with_cursor_updates_in_place() {
    let pool = mem_pool();
    let mut state = AppState::new();

    let a = add(&pool, &mut state, "A", "a");
    let b = add(&pool, &mut state, "B", "b");

    StoreLogic::edit(&mut state, a).expect("set cursor");
    // Cursor mirrors the event into the buffers
    assert_eq!(state.event_name, "A");
    assert_eq!(state.event_description, "a");

    state.event_name = "A2".to_string();
    let outcome = StoreLogic::save(&pool, &mut state).expect("save update");

    assert_eq!(outcome, SaveOutcome::Updated(a));
    assert_eq!(state.events.len(), 2);

    let first = state.events.get(a).expect("first event");
    assert_eq!(first.name, "A2");
    assert_eq!(first.description, "a");

    // Order untouched
    let ids: Vec<i64> = state.events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(state.editing, None);
}

#[test]
fn save_with_stale_cursor_degrades_to_create() {
    let pool = mem_pool();
    let mut state = AppState::new();

    let a = add(&pool, &mut state, "A", "a");
    StoreLogic::edit(&mut state, a).expect("set cursor");

    // Event vanishes while the cursor still points at it
    StoreLogic::delete(&pool, &mut state, a).expect("delete");

    state.event_name = "B".to_string();
    let outcome = StoreLogic::save(&pool, &mut state).expect("save");

    assert!(matches!(outcome, SaveOutcome::Created(_)));
    assert_eq!(state.events.len(), 1);
}

#[test]
fn delete_preserves_order_of_rest() {
    let pool = mem_pool();
    let mut state = AppState::new();

    let a = add(&pool, &mut state, "A", "");
    let b = add(&pool, &mut state, "B", "");
    let c = add(&pool, &mut state, "C", "");

    let removed = StoreLogic::delete(&pool, &mut state, b).expect("delete");
    assert!(removed);

    let ids: Vec<i64> = state.events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn delete_absent_id_is_total() {
    let pool = mem_pool();
    let mut state = AppState::new();

    add(&pool, &mut state, "A", "");
    let removed = StoreLogic::delete(&pool, &mut state, 999).expect("delete absent");

    assert!(!removed);
    assert_eq!(state.events.len(), 1);
}

#[test]
fn login_ignores_password_and_persists_username() {
    let pool = mem_pool();
    let mut state = AppState::new();

    let first = SessionLogic::login(&pool, &mut state, "alice", "x").expect("login");
    assert_eq!(first, LoginOutcome::Registered);
    assert!(state.session.is_logged_in);

    // Same user, any password: returning
    let again = SessionLogic::login(&pool, &mut state, "alice", "y").expect("login again");
    assert_eq!(again, LoginOutcome::Returning);

    // Restored state carries the username but never the password
    let restored = Bootstrap::load(&pool).expect("bootstrap");
    assert_eq!(restored.session.username, "alice");
    assert_eq!(restored.session.password, "");
}

#[test]
fn logout_resets_everything() {
    let pool = mem_pool();
    let mut state = AppState::new();

    SessionLogic::login(&pool, &mut state, "alice", "secret").expect("login");
    SessionLogic::logout(&pool, &mut state).expect("logout");

    assert!(!state.session.is_logged_in);
    assert_eq!(state.session.username, "");
    assert_eq!(state.session.password, "");

    let restored = Bootstrap::load(&pool).expect("bootstrap");
    assert!(!restored.session.is_logged_in);
}

#[test]
fn events_survive_a_reload() {
    let pool = mem_pool();
    let mut state = AppState::new();

    add(&pool, &mut state, "Standup", "Daily sync");
    add(&pool, &mut state, "Retro", "");

    let restored = Bootstrap::load(&pool).expect("bootstrap");
    let names: Vec<&str> = restored.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Standup", "Retro"]);
}
