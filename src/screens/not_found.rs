use dioxus::prelude::*;
use crate::app::Route;
use crate::theme::{button_style, AppColors};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; gap: 24px; margin-top: 30px;",
            p { style: "font-size: 1.125rem; color: {AppColors::ERROR};", "Nothing lives at /{path}." }
            Link { to: Route::EventsPage {}, style: "{button_style()} text-decoration: none;", "All Events" }
        }
    }
}
