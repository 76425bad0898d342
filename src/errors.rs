//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt event list: {0}")]
    CorruptEventList(#[from] serde_json::Error),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Not logged in. Run 'evman login <username>' first")]
    NotLoggedIn,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No event found with id {0}")]
    EventNotFound(i64),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
