//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_store;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(expand_tilde(path))?;
        Ok(Self { conn })
    }

    /// Open the store and make sure the schema exists.
    /// Commands other than `init` go through here so a fresh `--db` path
    /// is usable without an explicit init step.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_store(&pool.conn)?;
        Ok(pool)
    }
}
