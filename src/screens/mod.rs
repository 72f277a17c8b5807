mod event;
mod events;
mod not_found;

pub use event::EventPage;
pub use events::EventsPage;
pub use not_found::NotFound;
