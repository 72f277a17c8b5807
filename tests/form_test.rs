//! Create/edit form values: edits, category toggles, organizer default, validation.

mod common;

use common::{event, users};
use events_frontend::form::{EventFormValues, FormField, DEFAULT_ORGANIZER};
use events_frontend::models::{CategoryId, UserId};
use pretty_assertions::assert_eq;

fn filled() -> EventFormValues {
    let mut v = EventFormValues::default();
    v.set(FormField::Title, "Picnic".to_string());
    v.set(FormField::Description, "Bring food".to_string());
    v.set(FormField::Location, "Vondelpark".to_string());
    v.set(FormField::StartTime, "2024-06-01T12:00".to_string());
    v.set(FormField::EndTime, "2024-06-01T15:00".to_string());
    v.toggle_category(CategoryId(3), true);
    v
}

#[test]
fn blank_form_defaults_to_first_organizer_id() {
    let v = EventFormValues::default();
    assert_eq!(v.created_by, DEFAULT_ORGANIZER.to_string());
    assert!(v.category_ids.is_empty());
    assert_eq!(v.organizer_or_default(&users()), Some(UserId(1)));
}

#[test]
fn edit_form_starts_from_the_event() {
    let mut e = event(4, "Chess club", &[2, 3]);
    e.created_by = UserId(2);
    let v = EventFormValues::from(&e);
    assert_eq!(v.title, "Chess club");
    assert_eq!(v.category_ids, vec![CategoryId(2), CategoryId(3)]);
    assert_eq!(v.created_by, "2");
}

#[test]
fn toggling_categories_keeps_one_entry_per_id() {
    let mut v = EventFormValues::default();
    v.toggle_category(CategoryId(1), true);
    v.toggle_category(CategoryId(2), true);
    v.toggle_category(CategoryId(1), true);
    assert_eq!(v.category_ids, vec![CategoryId(1), CategoryId(2)]);

    v.toggle_category(CategoryId(1), false);
    assert_eq!(v.category_ids, vec![CategoryId(2)]);
    assert!(v.is_checked(CategoryId(2)));
    assert!(!v.is_checked(CategoryId(1)));
}

#[test]
fn unknown_organizer_falls_back_to_first_user() {
    let mut v = EventFormValues::default();
    v.created_by = "99".to_string();
    assert_eq!(v.organizer_or_default(&users()), Some(UserId(1)));
    v.created_by = "not a number".to_string();
    assert_eq!(v.organizer_or_default(&users()), Some(UserId(1)));
    assert_eq!(v.organizer_or_default(&[]), None);
}

#[test]
fn validate_builds_payload_with_integer_organizer() {
    let mut v = filled();
    v.created_by = "2".to_string();
    let draft = v.validate(&users()).expect("valid form");
    assert_eq!(draft.created_by, UserId(2));
    assert_eq!(draft.title, "Picnic");
    assert_eq!(draft.category_ids, vec![CategoryId(3)]);
    assert_eq!(draft.image, "");
}

#[test]
fn validate_lists_every_missing_required_field() {
    let err = EventFormValues::default().validate(&users()).unwrap_err();
    assert_eq!(
        err.missing,
        vec!["title", "description", "location", "start time", "end time", "category"]
    );
    assert!(err.to_string().starts_with("Please fill in: title"));
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let mut v = filled();
    v.set(FormField::Location, "   ".to_string());
    let err = v.validate(&users()).unwrap_err();
    assert_eq!(err.missing, vec!["location"]);
}

#[test]
fn image_is_optional_but_kept() {
    let mut v = filled();
    v.set(FormField::Image, "https://example.com/p.jpg".to_string());
    let draft = v.validate(&users()).unwrap();
    assert_eq!(draft.image, "https://example.com/p.jpg");
}

#[test]
fn organizer_required_when_no_selection_resolves() {
    let mut v = filled();
    v.created_by = String::new();
    let err = v.validate(&[]).unwrap_err();
    assert_eq!(err.missing, vec!["organizer"]);
}
