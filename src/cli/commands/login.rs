use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bootstrap::Bootstrap;
use crate::core::session::{LoginOutcome, SessionLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Log in with any username. The password is collected and ignored:
/// matching the stored identity makes this a returning user, anything
/// else overwrites the stored identity. Never fails.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let pool = DbPool::open(&cfg.store)?;
        let mut state = Bootstrap::load(&pool)?;

        let outcome = SessionLogic::login(
            &pool,
            &mut state,
            username,
            password.as_deref().unwrap_or(""),
        )?;

        match outcome {
            LoginOutcome::Returning => {
                success(format!("Welcome back, {}!", username));
            }
            LoginOutcome::Registered => {
                success(format!("Registered and logged in as {}.", username));
            }
        }

        ttlog(&pool, "login", username, "session opened")?;
    }
    Ok(())
}
