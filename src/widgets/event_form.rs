use dioxus::prelude::*;
use crate::form::{EventFormValues, FormField};
use crate::models::NewEvent;
use crate::store::Store;
use crate::theme::{button_style, spacing, AppColors, INPUT_STYLE};

/// Shared create/edit form.
///
/// Controlled: the parent owns `values` and receives every edit through
/// `on_change`. Categories and users for the selectors come from the shared
/// store, so opening the form does not refetch them once cached.
#[component]
pub fn EventForm(
    values: EventFormValues,
    is_loading: bool,
    error: Option<String>,
    on_change: EventHandler<EventFormValues>,
    on_submit: EventHandler<NewEvent>,
    on_close: EventHandler<()>,
) -> Element {
    let store = use_context::<Store>();
    let categories = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.categories().await.unwrap_or_default() }
        }
    });
    let users = use_resource(move || {
        let store = store.clone();
        async move { store.users().await.unwrap_or_default() }
    });
    let mut invalid = use_signal(|| Option::<String>::None);

    if is_loading {
        return rsx! {
            div { style: "display: flex; justify-content: center; padding: {spacing::XL};", "Loading.." }
        };
    }

    let categories = categories.cloned().unwrap_or_default();
    let users = users.cloned().unwrap_or_default();
    let selected_organizer = values.organizer_or_default(&users);

    let edit = {
        let values = values.clone();
        move |field: FormField| {
            let values = values.clone();
            move |ev: FormEvent| {
                let mut next = values.clone();
                next.set(field.clone(), ev.value());
                on_change.call(next);
            }
        }
    };

    let submit = {
        let values = values.clone();
        let users = users.clone();
        move |ev: FormEvent| {
            ev.prevent_default();
            match values.validate(&users) {
                Ok(draft) => {
                    invalid.set(None);
                    on_submit.call(draft);
                }
                Err(e) => invalid.set(Some(e.to_string())),
            }
        }
    };

    let label_style = format!("display: block; margin-bottom: {}; font-weight: 600;", spacing::SM);
    let field_style = format!("margin-top: {};", spacing::MD);
    let message = invalid().or(error);

    rsx! {
        form { onsubmit: submit, style: "padding: {spacing::MD};",
            div {
                label { style: "{label_style}", "Event Title: *" }
                input {
                    name: "title",
                    value: "{values.title}",
                    placeholder: "What's the name of your event?",
                    oninput: edit(FormField::Title),
                    style: INPUT_STYLE,
                }
            }
            div { style: "{field_style}",
                label { style: "{label_style}", "Description: *" }
                textarea {
                    name: "description",
                    rows: "5",
                    value: "{values.description}",
                    placeholder: "Tell us about your event and why everyone should attend!",
                    oninput: edit(FormField::Description),
                    style: INPUT_STYLE,
                }
            }
            div { style: "{field_style}",
                label { style: "{label_style}", "Location: *" }
                input {
                    name: "location",
                    value: "{values.location}",
                    placeholder: "Where is the event?",
                    oninput: edit(FormField::Location),
                    style: INPUT_STYLE,
                }
            }
            div { style: "{field_style}",
                label { style: "{label_style}", "Image:" }
                input {
                    name: "image",
                    value: "{values.image}",
                    placeholder: "Link to your awesome event image.jpg",
                    oninput: edit(FormField::Image),
                    style: INPUT_STYLE,
                }
            }
            div { style: "margin-top: {spacing::XL};",
                label { style: "{label_style}", "The event is categorized as: *" }
                div { style: "display: flex; flex-direction: column; gap: {spacing::SM};",
                    for category in categories.iter() {
                        CategoryCheckbox {
                            key: "{category.id}",
                            label: category.name.clone(),
                            checked: values.is_checked(category.id),
                            on_toggle: {
                                let values = values.clone();
                                let id = category.id;
                                move |checked: bool| {
                                    let mut next = values.clone();
                                    next.toggle_category(id, checked);
                                    on_change.call(next);
                                }
                            },
                        }
                    }
                }
            }
            div { style: "display: flex; gap: {spacing::XL}; margin-top: {spacing::XL};",
                div { style: "flex: 1;",
                    label { style: "{label_style}", "Start Date & Time: *" }
                    input {
                        r#type: "datetime-local",
                        name: "startTime",
                        value: "{values.start_time}",
                        oninput: edit(FormField::StartTime),
                        style: INPUT_STYLE,
                    }
                }
                div { style: "flex: 1;",
                    label { style: "{label_style}", "End Date & Time: *" }
                    input {
                        r#type: "datetime-local",
                        name: "endTime",
                        value: "{values.end_time}",
                        oninput: edit(FormField::EndTime),
                        style: INPUT_STYLE,
                    }
                }
            }
            div { style: "margin: {spacing::XL} 0;",
                label { style: "{label_style}", "This event is set-up by: *" }
                select {
                    name: "createdBy",
                    style: INPUT_STYLE,
                    onchange: {
                        let values = values.clone();
                        move |ev: FormEvent| {
                            let mut next = values.clone();
                            next.created_by = ev.value();
                            on_change.call(next);
                        }
                    },
                    for user in users.iter() {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            selected: selected_organizer == Some(user.id),
                            "{user.name}"
                        }
                    }
                }
            }
            if let Some(msg) = message {
                p { style: "color: {AppColors::ERROR}; margin-bottom: {spacing::MD};", "{msg}" }
            }
            div { style: "display: flex; flex-wrap: wrap; gap: {spacing::XL};",
                button { r#type: "submit", style: "{button_style()}", "Submit" }
                button {
                    r#type: "button",
                    style: "{button_style()}",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn CategoryCheckbox(label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label { style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |ev: FormEvent| on_toggle.call(ev.checked()),
            }
            "{label}"
        }
    }
}
