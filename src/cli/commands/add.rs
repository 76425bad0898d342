use crate::cli::commands::load_logged_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a new event to the end of the list.
/// Empty name and description are accepted as-is; nothing is validated.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, description } = cmd {
        let pool = DbPool::open(&cfg.store)?;
        let mut state = load_logged_in(&pool)?;

        // Fill the input buffers, then save with no edit cursor
        state.event_name = name.clone();
        state.event_description = description.clone();
        let outcome = StoreLogic::save(&pool, &mut state)?;

        success(format!("Event #{} added: {}", outcome.id(), name));
        ttlog(&pool, "add", &outcome.id().to_string(), name)?;
    }
    Ok(())
}
