mod card;
mod delete_event;
mod event_form;
mod event_item;
mod modal_dialog;
mod navigation;
mod search_bar;
mod toast_host;

pub use card::Card;
pub use delete_event::DeleteEvent;
pub use event_form::EventForm;
pub use event_item::{CategoryBadge, EventItem};
pub use modal_dialog::ModalDialog;
pub use navigation::Navigation;
pub use search_bar::SearchBar;
pub use toast_host::{show_toast, ToastHost};
