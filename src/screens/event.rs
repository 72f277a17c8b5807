use dioxus::prelude::*;
use crate::app::Route;
use crate::display::{category_label, format_timestamp, image_src};
use crate::form::EventFormValues;
use crate::modal::ModalState;
use crate::models::{find_user, EventId, NewEvent};
use crate::notify::{messages, Toasts};
use crate::store::Store;
use crate::theme::{button_style, spacing, AppColors};
use crate::widgets::{show_toast, CategoryBadge, DeleteEvent, EventForm, ModalDialog};
use tracing::info;

/// Details of one event with edit and delete actions.
#[component]
pub fn EventPage(id: EventId) -> Element {
    let store = use_context::<Store>();
    let toasts = use_context::<Signal<Toasts>>();
    let nav = navigator();

    let mut event = use_resource({
        let store = store.clone();
        use_reactive((&id,), move |(id,)| {
            let store = store.clone();
            async move { store.event(id).await }
        })
    });
    let categories = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.categories().await.unwrap_or_default() }
        }
    });
    let users = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.users().await.unwrap_or_default() }
        }
    });

    let mut edit_modal = use_signal(ModalState::default);
    let delete_modal = use_signal(ModalState::default);
    let mut form_values = use_signal(EventFormValues::default);

    use_effect(move || {
        if let Some(Err(e)) = event.cloned() {
            show_toast(toasts, messages::load_failed("the event", &e));
        }
    });

    let on_edit_submit = {
        let store = store.clone();
        move |draft: NewEvent| {
            if !edit_modal.write().confirm() {
                return;
            }
            let store = store.clone();
            spawn(async move {
                let result = store.update_event(id, draft).await;
                edit_modal.write().resolve(&result);
                match result {
                    Ok(_) => {
                        show_toast(toasts, messages::event_updated());
                        event.restart();
                        nav.replace(Route::EventPage { id });
                    }
                    Err(e) => show_toast(toasts, messages::update_failed(&e)),
                }
            });
        }
    };

    let on_delete = move |_: ()| {
        let mut delete_modal = delete_modal;
        let store = store.clone();
        info!("deleting event {}", id);
        spawn(async move {
            let result = store.delete_event(id).await;
            delete_modal.write().resolve(&result);
            match result {
                Ok(()) => {
                    show_toast(toasts, messages::event_deleted());
                    nav.push(Route::EventsPage {});
                }
                Err(e) => show_toast(toasts, messages::delete_failed(&e)),
            }
        });
    };

    let details = match event.cloned() {
        None => {
            return rsx! {
                div { style: "text-align: center; padding: {spacing::MD};", p { "Loading.." } }
            };
        }
        Some(Err(_)) => {
            return rsx! {
                div { style: "display: flex; justify-content: center; padding: {spacing::MD}; margin: 30px 0 40px;",
                    p { style: "font-size: 1.125rem; color: {AppColors::ERROR};", "Could not load this event." }
                }
            };
        }
        Some(Ok(None)) => {
            return rsx! {
                div { style: "display: flex; justify-content: center; padding: {spacing::MD}; margin: 30px 0 40px;",
                    p { style: "font-size: 1.125rem; color: {AppColors::ERROR};", "Event not found." }
                }
            };
        }
        Some(Ok(Some(details))) => details,
    };

    let categories = categories.cloned().unwrap_or_default();
    let users = users.cloned().unwrap_or_default();
    let organizer = find_user(&users, details.created_by).cloned();
    let organizer_name = organizer.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let src = image_src(&details.image).to_string();
    let start = format_timestamp(&details.start_time);
    let end = format_timestamp(&details.end_time);
    let modal = edit_modal();
    let open_values = EventFormValues::from(&details);

    rsx! {
        div { style: "display: flex; justify-content: center; padding: {spacing::MD}; margin: 30px 0 40px;",
            div { style: "width: 100%; max-width: 75%;",
                h1 { style: "text-align: center; margin-bottom: 15px;", "{details.title}" }
                div { style: "display: flex; flex-wrap: wrap;",
                    div { style: "flex: 1; display: flex; flex-direction: column;",
                        img { src: "{src}", alt: "Event", style: "height: 250px; border-radius: 8px; margin-bottom: 15px; object-fit: cover;" }
                        p { style: "margin-right: 20px;", "{details.description}" }
                        div { style: "display: flex; gap: 50px; margin-top: 50px;",
                            button {
                                style: "{button_style()}",
                                onclick: move |_| {
                                    form_values.set(open_values.clone());
                                    edit_modal.write().open();
                                },
                                "Edit event"
                            }
                            DeleteEvent { state: delete_modal, on_confirm: on_delete }
                        }
                    }
                    div { style: "flex: 1; margin-left: 50px;",
                        h2 { class: "heading-block", "DETAILS" }
                        p { style: "font-weight: bold; margin: 0;", "Start time:" }
                        p { style: "margin-bottom: 15px;", "{start}" }
                        p { style: "font-weight: bold; margin: 0;", "End time:" }
                        p { style: "margin-bottom: 15px;", "{end}" }
                        p { style: "font-weight: bold; margin: 0;", "Categories:" }
                        div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM}; margin-bottom: 25px;",
                            for cid in details.category_ids.iter() {
                                CategoryBadge { key: "{cid}", label: category_label(&categories, *cid) }
                            }
                        }
                        h2 { class: "heading-block", "LOCATION" }
                        p { style: "margin-bottom: 25px;", "{details.location}" }
                        h2 { class: "heading-block", "ORGANISER" }
                        div { style: "display: flex; align-items: center; gap: {spacing::SM};",
                            Avatar { name: organizer_name.clone(), image: organizer.map(|u| u.image).unwrap_or_default() }
                            span { "{organizer_name}" }
                        }
                    }
                }
                if modal.is_open() {
                    ModalDialog {
                        title: "Edit event",
                        on_close: move |_| edit_modal.write().cancel(),
                        EventForm {
                            values: form_values(),
                            is_loading: modal.is_pending(),
                            error: modal.error().map(String::from),
                            on_change: move |next: EventFormValues| form_values.set(next),
                            on_submit: on_edit_submit,
                            on_close: move |_| edit_modal.write().cancel(),
                        }
                    }
                }
            }
        }
    }
}

/// Round picture, or initials when the user has no image.
#[component]
fn Avatar(name: String, image: String) -> Element {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();

    if image.is_empty() {
        rsx! {
            div {
                class: "avatar",
                style: "width: 48px; height: 48px; border-radius: 50%; background: {AppColors::CHROME}; display: flex; align-items: center; justify-content: center; font-weight: bold;",
                "{initials}"
            }
        }
    } else {
        rsx! {
            img { class: "avatar", src: "{image}", alt: "{name}", style: "width: 48px; height: 48px; border-radius: 50%; object-fit: cover;" }
        }
    }
}
