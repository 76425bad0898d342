use serde::{Deserialize, Serialize};

/// A single user-created event.
///
/// `id` is assigned once at creation and never changes; edits replace
/// `name`/`description` in place. Both text fields may be empty, nothing
/// is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Event {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
