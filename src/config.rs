//! Configuration options for the gazetteer client.
//!
//! This module provides the [`GazetteerConfig`] struct which fixes the service
//! base URL and transport settings for a client. A config is immutable once it
//! has been handed to a [`crate::GazetteerClient`].

use std::time::Duration;

/// Default HistoGIS API base URL.
pub const DEFAULT_BASE_URL: &str = "https://histogis.acdh.oeaw.ac.at/api/";

/// Environment variable overriding the base URL in [`GazetteerConfig::from_env`].
pub const BASE_URL_ENV: &str = "HISTOGIS_URL";

/// Path of the paginated listing endpoint, relative to the base URL.
const LIST_PATH: &str = "tempspatial/?format=json";

/// Path of the point-in-time lookup endpoint, relative to the base URL.
const QUERY_PATH: &str = "where-was/";

/// Configuration for a [`crate::GazetteerClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use histogis::GazetteerConfig;
///
/// let config = GazetteerConfig::new()
///     .with_base_url("http://localhost:8000/api")
///     .with_timeout(Duration::from_secs(20));
///
/// assert_eq!(config.base_url(), "http://localhost:8000/api/");
/// assert_eq!(config.query_endpoint(), "http://localhost:8000/api/where-was/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerConfig {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("histogis-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl GazetteerConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default configuration, taking the base URL from
    /// `HISTOGIS_URL` when that variable is set and not empty.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new().with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    /// Sets the service base URL. A trailing slash is appended if absent.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Sets the User-Agent header sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a per-request timeout for the default transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the User-Agent header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the URL of the first page of the feature listing.
    #[must_use]
    pub fn list_endpoint(&self) -> String {
        format!("{}{LIST_PATH}", self.base_url)
    }

    /// Returns the URL of the spatial lookup endpoint.
    #[must_use]
    pub fn query_endpoint(&self) -> String {
        format!("{}{QUERY_PATH}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = GazetteerConfig::default();
        assert_eq!(config.base_url(), "https://histogis.acdh.oeaw.ac.at/api/");
        assert_eq!(
            config.list_endpoint(),
            "https://histogis.acdh.oeaw.ac.at/api/tempspatial/?format=json"
        );
        assert_eq!(
            config.query_endpoint(),
            "https://histogis.acdh.oeaw.ac.at/api/where-was/"
        );
        assert!(config.timeout().is_none());
        assert!(config.user_agent().starts_with("histogis-rs/"));
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let without = GazetteerConfig::new().with_base_url("http://localhost/api");
        let with = GazetteerConfig::new().with_base_url("http://localhost/api/");
        assert_eq!(without.base_url(), "http://localhost/api/");
        assert_eq!(without, with);
    }

    #[test]
    fn test_builder_settings() {
        let config = GazetteerConfig::new()
            .with_user_agent("tester/1.0")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.user_agent(), "tester/1.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }
}
