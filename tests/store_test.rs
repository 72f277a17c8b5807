//! Shared cache: read-through, invalidation on mutation, failure handling.

mod common;

use common::{event, FakeSource, SlowFirstList};
use events_frontend::error::ApiError;
use events_frontend::models::{CategoryId, EventId, NewEvent, UserId};
use events_frontend::store::{Resource, Store};
use pretty_assertions::assert_eq;

fn draft(title: &str) -> NewEvent {
    NewEvent {
        created_by: UserId(2),
        title: title.to_string(),
        description: "Fresh".to_string(),
        image: String::new(),
        category_ids: vec![CategoryId(1)],
        location: "Beach".to_string(),
        start_time: "2024-07-01T10:00".to_string(),
        end_time: "2024-07-01T12:00".to_string(),
    }
}

#[tokio::test]
async fn categories_and_users_are_fetched_once() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());

    // list page, card and form all ask for categories
    for _ in 0..3 {
        assert_eq!(store.categories().await.unwrap().len(), 3);
    }
    store.users().await.unwrap();
    store.clone().users().await.unwrap();

    assert_eq!(source.state.count("GET /categories"), 1);
    assert_eq!(source.state.count("GET /users"), 1);
    assert!(store.is_cached(Resource::Categories));
}

#[tokio::test]
async fn failed_reads_are_not_cached() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());

    *source.state.fail_reads.borrow_mut() = true;
    assert!(matches!(store.events().await, Err(ApiError::Transport(_))));
    assert!(!store.is_cached(Resource::Events));

    *source.state.fail_reads.borrow_mut() = false;
    assert_eq!(store.events().await.unwrap().len(), 4);
    assert_eq!(source.state.count("GET /events"), 2);
}

#[tokio::test]
async fn single_event_uses_cached_list_when_present() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());

    let found = store.event(EventId(2)).await.unwrap().unwrap();
    assert_eq!(found.title, "Yoga in the park");
    assert_eq!(source.state.count("GET /events?id=2"), 1);

    store.events().await.unwrap();
    let again = store.event(EventId(3)).await.unwrap();
    assert_eq!(again.map(|e| e.id), Some(EventId(3)));
    assert_eq!(source.state.count("GET /events?id=3"), 0);
}

#[tokio::test]
async fn missing_event_is_none_and_triggers_nothing_else() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());

    assert_eq!(store.event(EventId(999)).await.unwrap(), None);
    assert_eq!(source.state.calls(), vec!["GET /events?id=999".to_string()]);
}

#[tokio::test]
async fn create_assigns_next_id_and_invalidates_events() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());
    store.events().await.unwrap();

    let created = store.create_event(draft("Kite surfing")).await.unwrap();

    // highest existing id is 5
    assert_eq!(created.id, EventId(6));
    assert_eq!(created.created_by, UserId(2));
    assert!(!store.is_cached(Resource::Events));
    assert_eq!(store.events().await.unwrap().len(), 5);
}

#[tokio::test]
async fn failed_create_keeps_cache() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());
    store.events().await.unwrap();
    *source.state.fail_mutations.borrow_mut() = Some(500);

    let err = store.create_event(draft("Nope")).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: String::new() });
    assert!(store.is_cached(Resource::Events));
    assert_eq!(store.events().await.unwrap().len(), 4);
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());

    let updated = store.update_event(EventId(3), draft("Board games XL")).await.unwrap();
    assert_eq!(updated.id, EventId(3));

    let reloaded = store.event(EventId(3)).await.unwrap().unwrap();
    assert_eq!(reloaded.title, "Board games XL");
    assert_eq!(reloaded.location, "Beach");
    assert_eq!(reloaded.category_ids, vec![CategoryId(1)]);
    assert!(source.state.calls().contains(&"PUT /events/3".to_string()));
}

#[tokio::test]
async fn delete_issues_request_and_drops_event() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());
    store.events().await.unwrap();

    store.delete_event(EventId(5)).await.unwrap();

    assert_eq!(source.state.count("DELETE /events/5"), 1);
    let remaining: Vec<i64> = store.events().await.unwrap().iter().map(|e| e.id.0).collect();
    assert_eq!(remaining, vec![1, 2, 3]);
}

#[tokio::test]
async fn failed_delete_leaves_event_in_place() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());
    store.events().await.unwrap();
    *source.state.fail_mutations.borrow_mut() = Some(500);

    let err = store.delete_event(EventId(2)).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert!(store.event(EventId(2)).await.unwrap().is_some());
    assert_eq!(store.events().await.unwrap().len(), 4);
}

#[tokio::test]
async fn read_in_flight_during_create_does_not_cache_stale_list() {
    let source = FakeSource::seeded();
    let slow = SlowFirstList::new(source.clone());
    let release = slow.release.clone();
    let store = Store::new(slow);
    let page = store.clone();

    let (page_events, created) = tokio::join!(page.events(), async {
        let created = store.create_event(draft("Kite surfing")).await;
        release.notify_one();
        created
    });

    // the page still sees the list it asked for
    assert_eq!(page_events.unwrap().len(), 4);
    let created = created.unwrap();
    assert_eq!(created.id, EventId(6));

    assert_eq!(store.events().await.unwrap().len(), 5);
    let found = store.event(EventId(6)).await.unwrap();
    assert_eq!(found.map(|e| e.title), Some("Kite surfing".to_string()));
}

#[tokio::test]
async fn cached_list_miss_asks_the_service() {
    let source = FakeSource::seeded();
    let store = Store::new(source.clone());
    store.events().await.unwrap();

    // created by someone else after the list was cached
    source.state.events.borrow_mut().push(event(9, "Pub quiz", &[2]));

    let found = store.event(EventId(9)).await.unwrap();
    assert_eq!(found.map(|e| e.id), Some(EventId(9)));
    assert_eq!(source.state.count("GET /events?id=9"), 1);
}
