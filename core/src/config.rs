//! Client configuration.

/// Environment variable holding the API root URL.
pub const BASE_URL_ENV: &str = "HEROES_API_URL";

/// Default API root, matching the mock server's default bind address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Configuration for `HeroService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; the heroes collection lives at `{base_url}/heroes`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `HEROES_API_URL`, falling back to the default when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}
