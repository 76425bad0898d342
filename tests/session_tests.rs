use predicates::str::contains;

mod common;
use common::{evm, setup_test_store};

#[test]
fn test_first_login_registers_new_identity() {
    let store = setup_test_store("first_login");

    evm()
        .args(["--db", &store, "login", "alice", "-p", "x"])
        .assert()
        .success()
        .stdout(contains("Registered and logged in as alice"));

    evm()
        .args(["--db", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as alice"));
}

#[test]
fn test_returning_login_keeps_identity() {
    let store = setup_test_store("returning_login");

    evm()
        .args(["--db", &store, "login", "alice", "-p", "x"])
        .assert()
        .success();

    // Same username, different password: password is ignored entirely
    evm()
        .args(["--db", &store, "login", "alice", "-p", "y"])
        .assert()
        .success()
        .stdout(contains("Welcome back, alice"));
}

#[test]
fn test_login_with_different_username_overwrites_identity() {
    let store = setup_test_store("overwrite_login");

    evm()
        .args(["--db", &store, "login", "alice"])
        .assert()
        .success();

    evm()
        .args(["--db", &store, "login", "bob"])
        .assert()
        .success()
        .stdout(contains("Registered and logged in as bob"));

    evm()
        .args(["--db", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as bob"));
}

#[test]
fn test_logout_clears_identity() {
    let store = setup_test_store("logout");

    evm()
        .args(["--db", &store, "login", "alice"])
        .assert()
        .success();

    evm()
        .args(["--db", &store, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out alice"));

    evm()
        .args(["--db", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));

    // After logout the same username registers from scratch again
    evm()
        .args(["--db", &store, "login", "alice"])
        .assert()
        .success()
        .stdout(contains("Registered and logged in as alice"));
}

#[test]
fn test_logout_without_session_is_fine() {
    let store = setup_test_store("logout_empty");

    evm()
        .args(["--db", &store, "logout"])
        .assert()
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn test_login_accepts_empty_username() {
    let store = setup_test_store("empty_username");

    // Login never fails, malformed or empty input included
    evm()
        .args(["--db", &store, "login", ""])
        .assert()
        .success();
}
