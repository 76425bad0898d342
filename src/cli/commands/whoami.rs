use crate::config::Config;
use crate::core::bootstrap::Bootstrap;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the restored session. Read-only: touches neither key.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.store)?;
    let state = Bootstrap::load(&pool)?;

    if state.session.is_logged_in {
        println!(
            "Logged in as {} ({} event{})",
            state.session.username,
            state.events.len(),
            if state.events.len() == 1 { "" } else { "s" }
        );
    } else {
        info("Not logged in.");
    }
    Ok(())
}
