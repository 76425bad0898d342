#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn evm() -> Command {
    cargo_bin_cmd!("evman")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_evman.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Log in as the given user against the given store
pub fn login_as(store_path: &str, user: &str) {
    evm()
        .args(["--db", store_path, "login", user])
        .assert()
        .success();
}

/// Log in and add a couple of events useful for many tests
pub fn init_store_with_data(store_path: &str) {
    login_as(store_path, "alice");

    evm()
        .args(["--db", store_path, "add", "Standup", "Daily sync"])
        .assert()
        .success();

    evm()
        .args(["--db", store_path, "add", "Retro", "Sprint retrospective"])
        .assert()
        .success();
}
