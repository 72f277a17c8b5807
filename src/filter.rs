//! Client-side filtering for the events list.
//! Pure functions, no Dioxus required.

use crate::models::{category_name, Category, Event};

/// Free-text search plus an optional category-name filter. Empty strings
/// mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub search_term: String,
    pub category: String,
}

impl EventFilter {
    /// At least one of the event's category ids resolves to a category
    /// named exactly `self.category`.
    pub fn matches_category(&self, event: &Event, categories: &[Category]) -> bool {
        self.category.is_empty()
            || event
                .category_ids
                .iter()
                .any(|id| category_name(categories, *id) == Some(self.category.as_str()))
    }

    /// Title contains the search term, case-insensitively.
    pub fn matches_search(&self, event: &Event) -> bool {
        self.search_term.is_empty()
            || event
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }

    pub fn matches(&self, event: &Event, categories: &[Category]) -> bool {
        self.matches_category(event, categories) && self.matches_search(event)
    }
}

pub fn filter_events(events: &[Event], categories: &[Category], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|e| filter.matches(e, categories))
        .cloned()
        .collect()
}

/// State behind the list page. `filtered` is recomputed whenever the
/// events, the categories or either filter changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventList {
    events: Vec<Event>,
    categories: Vec<Category>,
    filter: EventFilter,
    filtered: Vec<Event>,
}

impl EventList {
    pub fn new(events: Vec<Event>, categories: Vec<Category>) -> Self {
        let mut list = Self {
            events,
            categories,
            ..Default::default()
        };
        list.recompute();
        list
    }

    fn recompute(&mut self) {
        self.filtered = filter_events(&self.events, &self.categories, &self.filter);
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.recompute();
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.recompute();
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
        self.recompute();
    }

    /// A freshly created event joins the visible list only; the source list
    /// is left alone until the next reload.
    pub fn push_created(&mut self, event: Event) {
        self.filtered.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }
}
