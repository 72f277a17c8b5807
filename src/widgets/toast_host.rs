use dioxus::prelude::*;
use chrono::Utc;
use crate::notify::{sleep_ms, Notification, NotificationKind, Toasts, TOAST_DURATION_MS};
use crate::theme::{spacing, AppColors};

/// Shows `notification` and takes it down again after its lifetime.
pub fn show_toast(mut toasts: Signal<Toasts>, notification: Notification) {
    let id = notification.id;
    toasts.write().push(notification);
    spawn(async move {
        sleep_ms(TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });
}

/// Renders live toasts bottom-center.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let now = Utc::now();
    let visible: Vec<_> = toasts
        .read()
        .items()
        .iter()
        .filter(|n| !n.is_expired(now))
        .cloned()
        .collect();

    rsx! {
        div { style: "position: fixed; bottom: {spacing::LG}; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; gap: {spacing::SM}; z-index: 20;",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    role: "status",
                    style: "background: {AppColors::toast(toast.kind == NotificationKind::Error)}; color: white; border-radius: 6px; padding: {spacing::SM} {spacing::MD}; min-width: 280px; display: flex; gap: {spacing::MD};",
                    div { style: "flex: 1;",
                        p { style: "font-weight: bold; margin: 0;", "{toast.title}" }
                        p { style: "margin: 0;", "{toast.description}" }
                    }
                    button {
                        style: "background: none; border: none; color: white; cursor: pointer;",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
