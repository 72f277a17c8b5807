//! Fixtures shared by the integration tests: sample records and an in-memory
//! data source that counts calls.
#![allow(dead_code)]

use async_trait::async_trait;
use events_frontend::api::DataSource;
use events_frontend::error::{ApiError, ApiResult};
use events_frontend::models::{Category, CategoryId, Event, EventId, User, UserId};
use std::cell::RefCell;
use std::rc::Rc;

pub fn event(id: i64, title: &str, categories: &[i64]) -> Event {
    Event {
        id: EventId(id),
        created_by: UserId(1),
        title: title.to_string(),
        description: format!("About {}", title),
        image: String::new(),
        category_ids: categories.iter().map(|c| CategoryId(*c)).collect(),
        location: "Amsterdam".to_string(),
        start_time: "2023-03-10T18:00".to_string(),
        end_time: "2023-03-10T20:00".to_string(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        Category { id: CategoryId(1), name: "sports".to_string() },
        Category { id: CategoryId(2), name: "games".to_string() },
        Category { id: CategoryId(3), name: "relaxation".to_string() },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User { id: UserId(1), name: "Ignacio Doe".to_string(), image: "https://example.com/ignacio.jpg".to_string() },
        User { id: UserId(2), name: "Jane Bennett".to_string(), image: String::new() },
    ]
}

pub fn sample_events() -> Vec<Event> {
    vec![
        event(1, "Bowling night", &[1, 2]),
        event(2, "Yoga in the park", &[1, 3]),
        event(3, "Board game evening", &[2]),
        event(5, "Spa day", &[3]),
    ]
}

#[derive(Default)]
pub struct FakeState {
    pub events: RefCell<Vec<Event>>,
    pub categories: RefCell<Vec<Category>>,
    pub users: RefCell<Vec<User>>,
    /// Status code every mutation fails with, when set.
    pub fail_mutations: RefCell<Option<u16>>,
    pub fail_reads: RefCell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeState {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
    }
}

/// In-memory stand-in for the data service.
#[derive(Clone)]
pub struct FakeSource {
    pub state: Rc<FakeState>,
}

impl FakeSource {
    pub fn seeded() -> Self {
        let state = FakeState::default();
        *state.events.borrow_mut() = sample_events();
        *state.categories.borrow_mut() = categories();
        *state.users.borrow_mut() = users();
        Self { state: Rc::new(state) }
    }

    fn record(&self, call: String) {
        self.state.calls.borrow_mut().push(call);
    }

    fn read_guard(&self) -> ApiResult<()> {
        if *self.state.fail_reads.borrow() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn mutation_guard(&self) -> ApiResult<()> {
        match *self.state.fail_mutations.borrow() {
            Some(status) => Err(ApiError::Status { status, body: String::new() }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DataSource for FakeSource {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        self.record("GET /events".to_string());
        self.read_guard()?;
        Ok(self.state.events.borrow().clone())
    }

    async fn find_event(&self, id: EventId) -> ApiResult<Option<Event>> {
        self.record(format!("GET /events?id={}", id));
        self.read_guard()?;
        Ok(self.state.events.borrow().iter().find(|e| e.id == id).cloned())
    }

    async fn create_event(&self, event: &Event) -> ApiResult<Event> {
        self.record("POST /events".to_string());
        self.mutation_guard()?;
        self.state.events.borrow_mut().push(event.clone());
        Ok(event.clone())
    }

    async fn update_event(&self, event: &Event) -> ApiResult<Event> {
        self.record(format!("PUT /events/{}", event.id));
        self.mutation_guard()?;
        let mut events = self.state.events.borrow_mut();
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event.clone();
                Ok(event.clone())
            }
            None => Err(ApiError::Status { status: 404, body: String::new() }),
        }
    }

    async fn delete_event(&self, id: EventId) -> ApiResult<()> {
        self.record(format!("DELETE /events/{}", id));
        self.mutation_guard()?;
        self.state.events.borrow_mut().retain(|e| e.id != id);
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.record("GET /categories".to_string());
        self.read_guard()?;
        Ok(self.state.categories.borrow().clone())
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record("GET /users".to_string());
        self.read_guard()?;
        Ok(self.state.users.borrow().clone())
    }
}

/// Wraps `FakeSource`; the first `list_events` snapshots the events and then
/// waits for `release` before answering, like a slow GET.
#[derive(Clone)]
pub struct SlowFirstList {
    pub inner: FakeSource,
    pub release: Rc<tokio::sync::Notify>,
    held: Rc<std::cell::Cell<bool>>,
}

impl SlowFirstList {
    pub fn new(inner: FakeSource) -> Self {
        Self {
            inner,
            release: Rc::new(tokio::sync::Notify::new()),
            held: Rc::new(std::cell::Cell::new(false)),
        }
    }
}

#[async_trait(?Send)]
impl DataSource for SlowFirstList {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        if self.held.replace(true) {
            return self.inner.list_events().await;
        }
        let snapshot = self.inner.list_events().await?;
        self.release.notified().await;
        Ok(snapshot)
    }

    async fn find_event(&self, id: EventId) -> ApiResult<Option<Event>> {
        self.inner.find_event(id).await
    }

    async fn create_event(&self, event: &Event) -> ApiResult<Event> {
        self.inner.create_event(event).await
    }

    async fn update_event(&self, event: &Event) -> ApiResult<Event> {
        self.inner.update_event(event).await
    }

    async fn delete_event(&self, id: EventId) -> ApiResult<()> {
        self.inner.delete_event(id).await
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.inner.list_categories().await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.inner.list_users().await
    }
}
