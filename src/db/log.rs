use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::params;

/// Write an internal log line into the `log` table.
/// `operation` is the command name (login, logout, add, edit, del, init),
/// `target` the username or event id it acted on.
pub fn ttlog(pool: &DbPool, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}
