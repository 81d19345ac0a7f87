//! Remote API configuration.
//!
//! # Environment Variables
//!
//! - `DORMHUB_API_URL`: Base URL every endpoint path is appended to
//!   (default: `http://localhost:3000/api`)
//! - `DORMHUB_USER_AGENT`: `User-Agent` header sent with every request
//!   (default: `dormhub/<crate version>`)

use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for unset or blank values.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("DORMHUB_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let user_agent = env::var("DORMHUB_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Self {
            base_url: normalize_base_url(&base_url),
            user_agent,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Joins an endpoint path onto the base URL.
    ///
    /// ```ignore
    /// let config = ApiConfig::default();
    /// assert_eq!(config.url("dorms"), "http://localhost:3000/api/dorms");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn default_user_agent() -> String {
    format!("dormhub/{}", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert!(config.user_agent.starts_with("dormhub/"));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slashes() {
        let config = ApiConfig::default().with_base_url(" http://10.0.2.2:3000/api// ");
        assert_eq!(config.base_url, "http://10.0.2.2:3000/api");
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/dorms"), "http://localhost:3000/api/dorms");
        assert_eq!(config.url("dorms/d1/rooms"), "http://localhost:3000/api/dorms/d1/rooms");
    }
}
