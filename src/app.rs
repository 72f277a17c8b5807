use dioxus::prelude::*;
use crate::api::HttpDataSource;
use crate::config::ApiConfig;
use crate::models::EventId;
use crate::notify::Toasts;
use crate::screens::{EventPage, EventsPage, NotFound};
use crate::store::Store;
use crate::widgets::{Navigation, ToastHost};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        EventsPage {},
        #[route("/events/:id")]
        EventPage { id: EventId },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!("events data service at {}", config.base_url);
        Store::new(HttpDataSource::new(config))
    });
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            Router::<Route> {}
        }
    }
}

/// Static chrome around every page: navigation on event pages, toasts.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let show_navigation = matches!(route, Route::EventPage { .. });

    rsx! {
        if show_navigation {
            Navigation {}
        }
        Outlet::<Route> {}
        ToastHost {}
    }
}
