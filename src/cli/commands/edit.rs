use crate::cli::commands::load_logged_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Update an event in place.
///
/// Pointing the edit cursor at the event mirrors its current fields into
/// the input buffers; `--name`/`--desc` then override whichever buffer
/// they name, so an omitted flag keeps the stored value. The id and the
/// position in the list never change.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        description,
    } = cmd
    {
        let pool = DbPool::open(&cfg.store)?;
        let mut state = load_logged_in(&pool)?;

        StoreLogic::edit(&mut state, *id)?;

        if let Some(n) = name {
            state.event_name = n.clone();
        }
        if let Some(d) = description {
            state.event_description = d.clone();
        }

        let new_name = state.event_name.clone();
        StoreLogic::save(&pool, &mut state)?;

        success(format!("Event #{} updated: {}", id, new_name));
        ttlog(&pool, "edit", &id.to_string(), &new_name)?;
    }
    Ok(())
}
