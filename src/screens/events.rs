use dioxus::prelude::*;
use crate::app::Route;
use crate::filter::EventList;
use crate::form::EventFormValues;
use crate::modal::ModalState;
use crate::models::NewEvent;
use crate::notify::{messages, Toasts};
use crate::store::Store;
use crate::theme::{button_style, spacing, AppColors, INPUT_STYLE};
use crate::widgets::{show_toast, EventForm, EventItem, ModalDialog, SearchBar};

/// List of all events with search, category filter and "Add Event".
#[component]
pub fn EventsPage() -> Element {
    let store = use_context::<Store>();
    let toasts = use_context::<Signal<Toasts>>();

    let events = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.events().await }
        }
    });
    let categories = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.categories().await }
        }
    });

    let mut list = use_signal(EventList::default);
    let mut create_modal = use_signal(ModalState::default);
    let mut form_values = use_signal(EventFormValues::default);

    use_effect(move || match events.cloned() {
        Some(Ok(loaded)) => list.write().set_events(loaded),
        Some(Err(e)) => show_toast(toasts, messages::load_failed("events", &e)),
        None => {}
    });
    use_effect(move || match categories.cloned() {
        Some(Ok(loaded)) => list.write().set_categories(loaded),
        Some(Err(e)) => show_toast(toasts, messages::load_failed("categories", &e)),
        None => {}
    });

    let on_submit = move |draft: NewEvent| {
        if !create_modal.write().confirm() {
            return;
        }
        let store = store.clone();
        spawn(async move {
            let result = store.create_event(draft).await;
            create_modal.write().resolve(&result);
            match result {
                Ok(created) => {
                    show_toast(toasts, messages::event_created());
                    list.write().push_created(created);
                    form_values.set(EventFormValues::default());
                }
                Err(e) => show_toast(toasts, messages::create_failed(&e)),
            }
        });
    };

    let current = list.read().clone();
    let modal = create_modal();
    let loading = events.read().is_none();
    let load_failed = matches!(*events.read(), Some(Err(_)));

    rsx! {
        div {
            div { style: "display: flex; justify-content: center; background: {AppColors::CHROME}; margin-bottom: 50px;",
                div { style: "display: flex; width: 60vw; gap: 30px; padding: 20px; align-items: center;",
                    SearchBar {
                        search_term: current.filter().search_term.clone(),
                        on_search_change: move |term: String| list.write().set_search_term(term),
                    }
                    select {
                        value: "{current.filter().category}",
                        style: INPUT_STYLE,
                        onchange: move |ev: FormEvent| list.write().set_category_filter(ev.value()),
                        option { value: "", "All events" }
                        for category in current.categories().iter() {
                            option {
                                key: "{category.id}",
                                value: "{category.name}",
                                selected: current.filter().category == category.name,
                                "{category.name}"
                            }
                        }
                    }
                    button {
                        style: "{button_style()} width: 15vw;",
                        onclick: move |_| create_modal.write().open(),
                        "Add Event"
                    }
                }
            }

            if modal.is_open() {
                ModalDialog {
                    title: "Add event",
                    on_close: move |_| create_modal.write().cancel(),
                    EventForm {
                        values: form_values(),
                        is_loading: modal.is_pending(),
                        error: modal.error().map(String::from),
                        on_change: move |next: EventFormValues| form_values.set(next),
                        on_submit,
                        on_close: move |_| create_modal.write().cancel(),
                    }
                }
            }

            div { style: "display: flex; justify-content: center;",
                div { style: "margin-bottom: {spacing::LG};",
                    if loading {
                        p { "Loading.." }
                    } else if load_failed {
                        p { style: "color: {AppColors::ERROR};", "Could not load events." }
                    } else if current.filtered().is_empty() {
                        p { "No events match your search." }
                    }
                    for event in current.filtered().iter() {
                        Link {
                            key: "{event.id}",
                            to: Route::EventPage { id: event.id },
                            style: "display: block; margin-bottom: 16px; text-decoration: none; color: inherit;",
                            div { style: "width: 60vw; padding: {spacing::MD};",
                                EventItem { event: event.clone(), categories: current.categories().to_vec() }
                            }
                        }
                    }
                }
            }
        }
    }
}
