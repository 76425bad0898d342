use crate::config::Config;
use crate::core::bootstrap::Bootstrap;
use crate::core::session::SessionLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Clear the session and delete the stored identity. Always succeeds,
/// even when nobody was logged in.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.store)?;
    let mut state = Bootstrap::load(&pool)?;

    let was = state.session.username.clone();
    SessionLogic::logout(&pool, &mut state)?;

    if was.is_empty() {
        info("No active session.");
    } else {
        success(format!("Logged out {}.", was));
        ttlog(&pool, "logout", &was, "session closed")?;
    }
    Ok(())
}
