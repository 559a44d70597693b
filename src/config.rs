//! API endpoint configuration loaded from environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Base-URL configuration for the REST backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for the given base URL. A trailing slash is trimmed
    /// so endpoint paths can always start with one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Load from `LINKLINE_BASE_URL`, falling back to the local dev backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LINKLINE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL for an endpoint path such as `/posts/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
