use crate::core::state::AppState;
use crate::db::kv::{KEY_CURRENT_USER, KEY_EVENT_LIST, kv_get, kv_set};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::events::EventList;
use crate::models::session::Session;
use crate::ui::messages::warning;

pub struct Bootstrap;

impl Bootstrap {
    /// Load both persisted keys into a fresh AppState.
    ///
    /// A stored identity restores a logged-in session with an empty
    /// password (the password is never persisted, so it cannot come back).
    /// A stored event list that fails to parse falls back to an empty
    /// sequence with a visible warning instead of aborting; the corrupt
    /// snapshot stays in place until the next write-through replaces it.
    pub fn load(pool: &DbPool) -> AppResult<AppState> {
        let mut state = AppState::new();

        if let Some(user) = kv_get(pool, KEY_CURRENT_USER)? {
            state.session = Session::restored(user);
        }

        if let Some(raw) = kv_get(pool, KEY_EVENT_LIST)? {
            match EventList::from_json(&raw) {
                Ok(events) => state.events = events,
                Err(e) => {
                    warning(format!("Stored event list is corrupt ({e}); starting empty"));
                }
            }
        }

        Ok(state)
    }

    /// Write the full event sequence through to the store, overwriting
    /// any prior snapshot. Called after every Event Store mutation; no
    /// diffing, no batching.
    pub fn sync_events(pool: &DbPool, state: &AppState) -> AppResult<()> {
        let snapshot = state.events.to_json()?;
        kv_set(pool, KEY_EVENT_LIST, &snapshot)
    }
}
