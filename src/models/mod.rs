mod category;
mod event;
mod ids;
mod user;

pub use category::{category_name, Category};
pub use event::{next_event_id, Event, NewEvent};
pub use ids::{CategoryId, EventId, UserId};
pub use user::{find_user, User};
