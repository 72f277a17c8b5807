use dioxus::prelude::*;
use crate::app::Route;
use crate::theme::{button_style, AppColors};

#[component]
pub fn Navigation() -> Element {
    rsx! {
        nav { style: "display: flex; justify-content: center; background: {AppColors::CHROME}; padding: 10px 0;",
            Link { to: Route::EventsPage {}, style: "{button_style()} text-decoration: none;", "All Events" }
        }
    }
}
