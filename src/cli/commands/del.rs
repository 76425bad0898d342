use crate::cli::commands::load_logged_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete an event by id. A missing id is reported but is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::open(&cfg.store)?;
        let mut state = load_logged_in(&pool)?;

        if cfg.confirm_delete && !*yes {
            let prompt = format!("Delete event #{}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if StoreLogic::delete(&pool, &mut state, *id)? {
            success(format!("Event #{} has been deleted.", id));
            ttlog(&pool, "del", &id.to_string(), "event deleted")?;
        } else {
            info(format!("No event with id {}; nothing to delete.", id));
        }
    }
    Ok(())
}
