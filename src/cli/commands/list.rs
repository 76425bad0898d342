use crate::cli::commands::load_logged_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// List all events in insertion order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { ids_only } = cmd {
        let pool = DbPool::open(&cfg.store)?;
        let state = load_logged_in(&pool)?;

        if state.events.is_empty() {
            println!("No events yet. Add one with 'evman add <name> [description]'.");
            return Ok(());
        }

        if *ids_only {
            for ev in state.events.iter() {
                println!("{}", ev.id);
            }
            return Ok(());
        }

        // Column widths from the actual data
        let id_w = state
            .events
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(2)
            .max(2);
        let name_w = state
            .events
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(4)
            .max(4);

        println!("Events for {}:\n", state.session.username);
        println!(
            "{:>id_w$}  {:<name_w$}  DESCRIPTION",
            "ID",
            "NAME",
            id_w = id_w,
            name_w = name_w
        );

        for ev in state.events.iter() {
            println!(
                "{:>id_w$}  {:<name_w$}  {}",
                ev.id,
                ev.name,
                ev.description,
                id_w = id_w,
                name_w = name_w
            );
        }
    }
    Ok(())
}
