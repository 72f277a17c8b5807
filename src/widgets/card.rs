use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; overflow: hidden; background: {AppColors::CARD}; border: 1px solid #E2E8F0; border-radius: 12px; padding: {spacing::CARD_PADDING}; gap: {spacing::LG};",
            {children}
        }
    }
}
