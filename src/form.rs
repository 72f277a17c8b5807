//! Values behind the create/edit form.
//!
//! The page that opens the form owns these values (checked categories
//! included); the form only renders them and reports edits.

use crate::error::FormError;
use crate::models::{CategoryId, Event, NewEvent, User, UserId};

/// Organizer preselected on a blank form.
pub const DEFAULT_ORGANIZER: UserId = UserId(1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Location,
    Image,
    StartTime,
    EndTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventFormValues {
    pub title: String,
    pub description: String,
    pub location: String,
    pub image: String,
    pub start_time: String,
    pub end_time: String,
    pub category_ids: Vec<CategoryId>,
    /// Raw `<select>` value; coerced to an integer on submit.
    pub created_by: String,
}

impl Default for EventFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            image: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            category_ids: Vec::new(),
            created_by: DEFAULT_ORGANIZER.to_string(),
        }
    }
}

impl From<&Event> for EventFormValues {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            image: event.image.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            category_ids: event.category_ids.clone(),
            created_by: event.created_by.to_string(),
        }
    }
}

impl EventFormValues {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Location => self.location = value,
            FormField::Image => self.image = value,
            FormField::StartTime => self.start_time = value,
            FormField::EndTime => self.end_time = value,
        }
    }

    pub fn is_checked(&self, id: CategoryId) -> bool {
        self.category_ids.contains(&id)
    }

    /// Check or uncheck a category; checking twice does not duplicate it.
    pub fn toggle_category(&mut self, id: CategoryId, checked: bool) {
        if checked {
            if !self.is_checked(id) {
                self.category_ids.push(id);
            }
        } else {
            self.category_ids.retain(|c| *c != id);
        }
    }

    /// The selected organizer if it is a known user, else the first user.
    /// With no users loaded yet the raw selection is kept as-is.
    pub fn organizer_or_default(&self, users: &[User]) -> Option<UserId> {
        let selected = self.created_by.trim().parse::<UserId>().ok();
        match selected {
            Some(id) if users.is_empty() || users.iter().any(|u| u.id == id) => Some(id),
            _ => users.first().map(|u| u.id),
        }
    }

    /// Required: title, description, location, both times, one category and
    /// an organizer. The image is optional.
    pub fn validate(&self, users: &[User]) -> Result<NewEvent, FormError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.start_time.trim().is_empty() {
            missing.push("start time");
        }
        if self.end_time.trim().is_empty() {
            missing.push("end time");
        }
        if self.category_ids.is_empty() {
            missing.push("category");
        }
        let organizer = self.organizer_or_default(users);
        if organizer.is_none() {
            missing.push("organizer");
        }

        match organizer {
            Some(created_by) if missing.is_empty() => Ok(NewEvent {
                created_by,
                title: self.title.clone(),
                description: self.description.clone(),
                image: self.image.clone(),
                category_ids: self.category_ids.clone(),
                location: self.location.clone(),
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
            }),
            _ => Err(FormError { missing }),
        }
    }
}
