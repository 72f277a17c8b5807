use dioxus::prelude::*;
use crate::display::{category_label, format_timestamp, image_src};
use crate::models::{Category, Event};
use crate::theme::{spacing, AppColors};
use crate::widgets::Card;

/// Summary card for one event. Pure rendering.
#[component]
pub fn EventItem(event: Event, categories: Vec<Category>) -> Element {
    let src = image_src(&event.image).to_string();
    let start = format_timestamp(&event.start_time);
    let end = format_timestamp(&event.end_time);

    rsx! {
        Card {
            img { src: "{src}", alt: "{event.title}", style: "max-width: 20vw; max-height: 20vw; object-fit: cover; border-radius: 8px;" }
            div { style: "flex: 1; min-width: 240px; color: {AppColors::ON_SURFACE};",
                p { style: "font-size: 1.25rem; font-weight: bold; margin: 0;", "{event.title}" }
                div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM}; margin: {spacing::SM} 0 {spacing::MD};",
                    for id in event.category_ids.iter() {
                        CategoryBadge { key: "{id}", label: category_label(&categories, *id) }
                    }
                }
                p { "{event.description}" }
                div { style: "display: flex; justify-content: space-between; width: 70%; margin-top: {spacing::SM};",
                    div {
                        p { style: "font-weight: bold; margin: 0;", "Starttime" }
                        p { style: "margin: 0;", "{start}" }
                    }
                    div {
                        p { style: "font-weight: bold; margin: 0;", "Endtime" }
                        p { style: "margin: 0;", "{end}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryBadge(label: String) -> Element {
    rsx! {
        span {
            style: "border: 1px solid {AppColors::ACCENT}; color: {AppColors::ACCENT}; border-radius: 4px; padding: 0 {spacing::XS}; font-size: 0.75rem; text-transform: uppercase; font-weight: 600;",
            "{label}"
        }
    }
}
