use dioxus::prelude::*;
use crate::theme::INPUT_STYLE;

#[component]
pub fn SearchBar(search_term: String, on_search_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "searchbar",
            r#type: "search",
            placeholder: "Find a fun event to attend",
            value: "{search_term}",
            oninput: move |ev| on_search_change.call(ev.value()),
            style: INPUT_STYLE,
        }
    }
}
