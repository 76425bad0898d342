use crate::models::events::EventList;
use crate::models::session::Session;

/// The whole in-memory application state, owned by the caller and threaded
/// explicitly through every operation. Mirrors the two persisted keys plus
/// the transient editing state that never touches the store.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub events: EventList,

    /// Edit cursor: id of the event currently targeted for update, if any.
    pub editing: Option<i64>,

    /// Input buffers for the event form. `save` consumes and resets them;
    /// `edit` mirrors the target event into them.
    pub event_name: String,
    pub event_description: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
