//! HTTP transport abstraction.
//!
//! Every remote interaction of this crate goes through the [`HttpClient`]
//! trait, so the gazetteer and linked-data services can be replaced by canned
//! responses in tests. [`ReqwestClient`] is the blocking production
//! implementation.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::{HistogisError, Result};

/// Trait for synchronous HTTP GET operations.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the request fails, the status
    /// is not a success, or the body cannot be read.
    fn get(&self, url: &str) -> Result<Vec<u8>>;

    /// Performs an HTTP GET request and returns only the status code.
    ///
    /// Unlike [`HttpClient::get`], a non-success status is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if no response was received.
    fn status(&self, url: &str) -> Result<u16>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        (**self).get(url)
    }

    fn status(&self, url: &str) -> Result<u16> {
        (**self).status(url)
    }
}

/// Blocking HTTP client backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a client sending `user_agent`, with an optional request timeout.
    ///
    /// `None` disables the timeout, so a stalled server blocks the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                HistogisError::Transport(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response> {
        trace!(url = url, "HTTP GET request starting");
        self.client.get(url).send().map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            HistogisError::Transport(format!("Request to {url} failed: {e}"))
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(url)?;
        let status = response.status();
        debug!(url = url, status = status.as_u16(), "HTTP response received");

        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(HistogisError::Transport(format!("HTTP {status} from {url}")));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| HistogisError::Transport(format!("Failed to read response: {e}")))
    }

    fn status(&self, url: &str) -> Result<u16> {
        Ok(self.send(url)?.status().as_u16())
    }
}
