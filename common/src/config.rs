//! API location.
//!
//! The client talks to a single fixed base address. The browser build may
//! bake in a different one at compile time (see the frontend's `app.rs`);
//! everything else derives its URLs from [`ApiConfig::routes`].

use crate::api::routes::Routes;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// A trailing `/` is dropped so routes can always start with one.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `value` when it is present and non-blank, the default otherwise.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base_url) if !base_url.is_empty() => Self::new(base_url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn routes(&self) -> Routes<'_> {
        Routes::new(&self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
