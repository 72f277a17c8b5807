use dioxus::prelude::*;
use crate::modal::ModalState;
use crate::theme::{button_style, spacing, AppColors};

/// "Delete Event" button plus the confirmation dialog it opens.
///
/// Only gates the caller's action: confirming moves `state` to pending and
/// calls `on_confirm`; the caller resolves the state when its request ends.
#[component]
pub fn DeleteEvent(state: Signal<ModalState>, on_confirm: EventHandler<()>) -> Element {
    let mut state = state;
    let current = state();

    rsx! {
        button {
            style: "{button_style()}",
            onclick: move |_| state.write().open(),
            "Delete Event"
        }
        if current.is_open() {
            div {
                style: "position: fixed; inset: 0; background: {AppColors::OVERLAY}; display: flex; justify-content: center; align-items: flex-start; z-index: 10;",
                div {
                    role: "alertdialog",
                    style: "margin-top: 30vh; background: {AppColors::CHROME}; border-radius: 8px; padding: {spacing::LG}; max-width: 480px;",
                    h3 { style: "margin: 0 0 {spacing::MD};", "Delete Event" }
                    p { "Are you sure you want to delete this event? This action cannot be undone." }
                    if let Some(err) = current.error() {
                        p { style: "color: {AppColors::ERROR};", "{err}" }
                    }
                    div { style: "display: flex; justify-content: flex-end; gap: {spacing::XL}; padding-top: {spacing::MD};",
                        button {
                            style: "{button_style()}",
                            disabled: current.is_pending(),
                            onclick: move |_| state.write().cancel(),
                            "Cancel"
                        }
                        button {
                            style: "{button_style()}",
                            disabled: current.is_pending(),
                            onclick: move |_| {
                                if state.write().confirm() {
                                    on_confirm.call(());
                                }
                            },
                            if current.is_pending() { "Deleting…" } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
