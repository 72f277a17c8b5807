use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Overlay with a centered panel. Clicking the backdrop closes it.
#[component]
pub fn ModalDialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: {AppColors::OVERLAY}; display: flex; justify-content: center; align-items: flex-start; overflow: auto; z-index: 10;",
            onclick: move |_| on_close.call(()),
            div {
                style: "margin-top: 10vh; background: {AppColors::CHROME}; border-radius: 8px; padding: {spacing::MD}; max-width: 640px; width: 100%;",
                onclick: move |ev| ev.stop_propagation(),
                h2 { style: "text-align: center; margin: {spacing::LG} 0 {spacing::SM}; font-weight: bold;", "{title}" }
                {children}
            }
        }
    }
}
