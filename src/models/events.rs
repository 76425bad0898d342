use crate::errors::AppResult;
use crate::models::event::Event;

/// The ordered event sequence plus its id generator.
///
/// Order is insertion order and carries no other meaning. Ids come from a
/// monotonic counter seeded from the highest id present, so a freshly
/// assigned id never collides with one already in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
    next_id: i64,
}

impl EventList {
    /// Rebuild a list from already-identified events (bootstrap path).
    pub fn from_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Append a new event built from `name`/`description`, assigning a
    /// fresh id. Returns the assigned id.
    pub fn append(&mut self, name: &str, description: &str) -> i64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.events.push(Event::new(id, name, description));
        id
    }

    /// Replace name/description of the event with the given id, keeping
    /// its id and position. Returns false if no such event exists.
    pub fn update(&mut self, id: i64, name: &str, description: &str) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(ev) => {
                ev.name = name.to_string();
                ev.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the event with the given id, preserving the order of the
    /// rest. Removing an absent id is a no-op; returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    /// Serialize the full sequence as the `eventList` JSON snapshot.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.events)?)
    }

    /// Parse an `eventList` snapshot back into a list.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let events: Vec<Event> = serde_json::from_str(raw)?;
        Ok(Self::from_events(events))
    }
}
