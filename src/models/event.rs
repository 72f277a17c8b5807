use super::{CategoryId, EventId, UserId};
use serde::{Deserialize, Serialize};

/// One event record as stored by the data service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub created_by: UserId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
}

/// Event payload produced by the form: everything but the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub created_by: UserId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category_ids: Vec<CategoryId>,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewEvent {
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            created_by: self.created_by,
            title: self.title,
            description: self.description,
            image: self.image,
            category_ids: self.category_ids,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Next id for a client-created event: highest existing id plus one.
///
/// Not collision-safe when two clients create at once; the store prefers the
/// id the server echoes back.
pub fn next_event_id(events: &[Event]) -> EventId {
    events
        .iter()
        .map(|e| e.id.0)
        .max()
        .map(|max| EventId(max + 1))
        .unwrap_or(EventId(1))
}
