//! HTTP client for the events data service (events, categories, users).
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, Event, EventId, User};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The remote collections the app reads and writes.
///
/// Futures are not `Send`: in the browser they wrap `fetch` promises.
#[async_trait(?Send)]
pub trait DataSource {
    /// GET /events
    async fn list_events(&self) -> ApiResult<Vec<Event>>;

    /// GET /events?id={id}; first match, `None` for an empty result.
    async fn find_event(&self, id: EventId) -> ApiResult<Option<Event>>;

    /// POST /events with the full record (id included).
    async fn create_event(&self, event: &Event) -> ApiResult<Event>;

    /// PUT /events/{id} with the full record.
    async fn update_event(&self, event: &Event) -> ApiResult<Event>;

    /// DELETE /events/{id}
    async fn delete_event(&self, id: EventId) -> ApiResult<()>;

    /// GET /categories
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    /// GET /users
    async fn list_users(&self) -> ApiResult<Vec<User>>;
}

/// `DataSource` over plain JSON HTTP.
#[derive(Clone, Debug)]
pub struct HttpDataSource {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpDataSource {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: CLIENT.clone(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url(path);
        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            error!("GET {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let text = checked_body(resp).await?;
        serde_json::from_str(&text).map_err(|e| {
            error!("GET {} returned malformed JSON: {}", url, e);
            ApiError::from(e)
        })
    }
}

/// Body of a 2xx response; anything else becomes `ApiError::Status`.
async fn checked_body(resp: reqwest::Response) -> ApiResult<String> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(text)
}

/// Echoed record from a write, or the sent record when the body is empty.
fn echoed_or_sent(text: &str, sent: &Event) -> ApiResult<Event> {
    if text.trim().is_empty() {
        return Ok(sent.clone());
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        self.get_json("events").await
    }

    async fn find_event(&self, id: EventId) -> ApiResult<Option<Event>> {
        let events: Vec<Event> = self.get_json(&format!("events?id={}", id)).await?;
        Ok(events.into_iter().next())
    }

    async fn create_event(&self, event: &Event) -> ApiResult<Event> {
        let url = self.config.url("events");
        debug!("POST {} (id {})", url, event.id);
        let resp = self.client.post(&url).json(event).send().await?;
        let text = checked_body(resp).await?;
        echoed_or_sent(&text, event)
    }

    async fn update_event(&self, event: &Event) -> ApiResult<Event> {
        let url = self.config.url(&format!("events/{}", event.id));
        debug!("PUT {}", url);
        let resp = self.client.put(&url).json(event).send().await?;
        let text = checked_body(resp).await?;
        echoed_or_sent(&text, event)
    }

    async fn delete_event(&self, id: EventId) -> ApiResult<()> {
        let url = self.config.url(&format!("events/{}", id));
        debug!("DELETE {}", url);
        let resp = self
            .client
            .delete(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        checked_body(resp).await?;
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_json("categories").await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("users").await
    }
}
