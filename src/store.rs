//! Shared read-through cache in front of the data source.
//!
//! Every view reads events, categories and users through one `Store`, so a
//! resource list is fetched once and reused until a mutation invalidates it.
//! Failed reads are never cached; concurrent misses each go to the network.

use crate::api::DataSource;
use crate::error::ApiResult;
use crate::models::{next_event_id, Category, Event, EventId, NewEvent, User};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// Cache key: one entry per remote collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    Categories,
    Users,
}

#[derive(Default)]
struct Cache {
    events: Option<Vec<Event>>,
    categories: Option<Vec<Category>>,
    users: Option<Vec<User>>,
    /// Bumped by every invalidation. A read only fills the cache when no
    /// invalidation happened while it was in flight.
    generation: u64,
}

impl Cache {
    fn clear(&mut self, resource: Resource) {
        self.generation += 1;
        match resource {
            Resource::Events => self.events = None,
            Resource::Categories => self.categories = None,
            Resource::Users => self.users = None,
        }
    }

    fn holds(&self, resource: Resource) -> bool {
        match resource {
            Resource::Events => self.events.is_some(),
            Resource::Categories => self.categories.is_some(),
            Resource::Users => self.users.is_some(),
        }
    }
}

/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct Store {
    source: Rc<dyn DataSource>,
    cache: Rc<RefCell<Cache>>,
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl Store {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Rc::new(source),
            cache: Rc::new(RefCell::new(Cache::default())),
        }
    }

    pub fn is_cached(&self, resource: Resource) -> bool {
        self.cache.borrow().holds(resource)
    }

    fn generation(&self) -> u64 {
        self.cache.borrow().generation
    }

    pub fn invalidate(&self, resource: Resource) {
        self.cache.borrow_mut().clear(resource);
    }

    pub async fn events(&self) -> ApiResult<Vec<Event>> {
        if let Some(events) = self.cache.borrow().events.clone() {
            return Ok(events);
        }
        let started = self.generation();
        let events = self.source.list_events().await?;
        let mut cache = self.cache.borrow_mut();
        if cache.generation == started {
            cache.events = Some(events.clone());
        }
        Ok(events)
    }

    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        if let Some(categories) = self.cache.borrow().categories.clone() {
            return Ok(categories);
        }
        let started = self.generation();
        let categories = self.source.list_categories().await?;
        let mut cache = self.cache.borrow_mut();
        if cache.generation == started {
            cache.categories = Some(categories.clone());
        }
        Ok(categories)
    }

    pub async fn users(&self) -> ApiResult<Vec<User>> {
        if let Some(users) = self.cache.borrow().users.clone() {
            return Ok(users);
        }
        let started = self.generation();
        let users = self.source.list_users().await?;
        let mut cache = self.cache.borrow_mut();
        if cache.generation == started {
            cache.users = Some(users.clone());
        }
        Ok(users)
    }

    /// One event by id; `Ok(None)` when the service has no such event.
    /// A cached list only answers hits; misses ask the service.
    pub async fn event(&self, id: EventId) -> ApiResult<Option<Event>> {
        let cached = self
            .cache
            .borrow()
            .events
            .as_ref()
            .map(|events| events.iter().find(|e| e.id == id).cloned());
        match cached {
            Some(Some(found)) => Ok(Some(found)),
            // not cached, or the cached list predates the event
            _ => self.source.find_event(id).await,
        }
    }

    /// Creates an event with the next client-side id and returns the stored
    /// record (the server's echo wins over the local id).
    pub async fn create_event(&self, draft: NewEvent) -> ApiResult<Event> {
        let existing = self.events().await?;
        let event = draft.with_id(next_event_id(&existing));
        let created = self.source.create_event(&event).await?;
        if created.id != event.id {
            warn!("server assigned id {} instead of {}", created.id, event.id);
        }
        self.invalidate(Resource::Events);
        info!("created event {}", created.id);
        Ok(created)
    }

    /// Full replacement of event `id`.
    pub async fn update_event(&self, id: EventId, draft: NewEvent) -> ApiResult<Event> {
        let event = draft.with_id(id);
        let updated = self.source.update_event(&event).await?;
        self.invalidate(Resource::Events);
        info!("updated event {}", id);
        Ok(updated)
    }

    pub async fn delete_event(&self, id: EventId) -> ApiResult<()> {
        self.source.delete_event(id).await?;
        self.invalidate(Resource::Events);
        info!("deleted event {}", id);
        Ok(())
    }
}
