use crate::core::bootstrap::Bootstrap;
use crate::core::state::AppState;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// What `save` did, used for messaging and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(i64),
    Updated(i64),
}

impl SaveOutcome {
    pub fn id(&self) -> i64 {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

pub struct StoreLogic;

impl StoreLogic {
    /// Save the current input buffers.
    ///
    /// With the edit cursor set this updates the targeted event in place
    /// (same id, same position); otherwise it appends a new event with a
    /// fresh id. Either way the cursor is cleared, the buffers are reset
    /// and the full sequence is written through to the store. Empty
    /// name/description are stored as-is.
    pub fn save(pool: &DbPool, state: &mut AppState) -> AppResult<SaveOutcome> {
        let name = std::mem::take(&mut state.event_name);
        let description = std::mem::take(&mut state.event_description);

        let mut updated = None;
        if let Some(id) = state.editing.take()
            && state.events.update(id, &name, &description)
        {
            updated = Some(SaveOutcome::Updated(id));
        }

        // A cursor pointing at a vanished event degrades to a create,
        // the same as saving with no cursor.
        let outcome = match updated {
            Some(o) => o,
            None => SaveOutcome::Created(state.events.append(&name, &description)),
        };

        Bootstrap::sync_events(pool, state)?;
        Ok(outcome)
    }

    /// Point the edit cursor at an event and mirror its fields into the
    /// input buffers. Does not touch the stored sequence.
    pub fn edit(state: &mut AppState, id: i64) -> AppResult<()> {
        let ev = state.events.get(id).ok_or(AppError::EventNotFound(id))?;
        state.event_name = ev.name.clone();
        state.event_description = ev.description.clone();
        state.editing = Some(id);
        Ok(())
    }

    /// Delete the event with the given id, keeping the order of the rest.
    /// An absent id is a no-op, not an error; the return value says
    /// whether anything was actually removed.
    pub fn delete(pool: &DbPool, state: &mut AppState, id: i64) -> AppResult<bool> {
        let removed = state.events.remove(id);
        // Full-snapshot write-through, even when nothing matched.
        Bootstrap::sync_events(pool, state)?;
        Ok(removed)
    }
}
