//! Key-value persistence layer over the `kv` table.
//!
//! Two logical keys exist: `currentUser` holds the stored identity as a
//! plain string, `eventList` holds the full event sequence as a JSON
//! snapshot. Values are opaque strings at this layer.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::OptionalExtension;
use rusqlite::params;

/// Key for the stored identity (plain username string).
pub const KEY_CURRENT_USER: &str = "currentUser";

/// Key for the serialized event sequence (JSON array).
pub const KEY_EVENT_LIST: &str = "eventList";

/// Read a value, `None` if the key is absent.
pub fn kv_get(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

/// Write a value, overwriting any prior value unconditionally.
pub fn kv_set(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])?;
    Ok(())
}

/// Delete a key. Deleting an absent key is a no-op.
pub fn kv_delete(pool: &DbPool, key: &str) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached("DELETE FROM kv WHERE key = ?1")?;
    stmt.execute([key])?;
    Ok(())
}
