//! Where the events data service lives.

/// Fixed local origin the data service is served from during development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time `EVENTS_API_URL` (the only option in the browser), then on
    /// native targets `.env` / the process environment.
    pub fn from_env() -> Self {
        let baked = option_env!("EVENTS_API_URL").unwrap_or(DEFAULT_API_URL);

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenv::dotenv().ok();
            if let Ok(url) = std::env::var("EVENTS_API_URL") {
                if !url.trim().is_empty() {
                    return Self::new(url.trim());
                }
            }
        }

        Self::new(baked)
    }

    /// Absolute URL for `path` (leading slash optional).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
