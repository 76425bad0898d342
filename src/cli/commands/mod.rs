pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod whoami;

use crate::core::bootstrap::Bootstrap;
use crate::core::state::AppState;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Bootstrap the state and insist on a logged-in session.
/// Event commands (add, edit, del, list) all sit behind this gate.
pub fn load_logged_in(pool: &DbPool) -> AppResult<AppState> {
    let state = Bootstrap::load(pool)?;
    if !state.session.is_logged_in {
        return Err(AppError::NotLoggedIn);
    }
    Ok(state)
}
