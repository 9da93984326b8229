//! Common test helpers shared across the integration test suite.

use std::fs;
use std::sync::Mutex;

use histogis::{GazetteerClient, GazetteerConfig, HistogisError, HttpClient, Result};

/// Base URL used by every mocked client.
#[allow(dead_code)]
pub const BASE_URL: &str = "http://gazetteer.test/api/";

/// Canned outcome for a mocked URL.
#[derive(Debug, Clone)]
pub enum Canned {
    /// 200 with this body.
    Body(Vec<u8>),
    /// A response with this status and no usable body.
    Status(u16),
    /// No response at all.
    Fail(String),
}

/// HTTP client answering from a table of URL prefixes.
///
/// The first route whose prefix matches the requested URL wins. Every
/// requested URL is recorded in order.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: Vec<(String, Canned)>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers URLs starting with `prefix` with `body`.
    pub fn with_body(mut self, prefix: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.push((prefix.to_string(), Canned::Body(body.into())));
        self
    }

    /// Answers URLs starting with `prefix` with the contents of a fixture.
    pub fn with_fixture(self, prefix: &str, fixture: &str) -> Self {
        let body = load_fixture(fixture);
        self.with_body(prefix, body)
    }

    /// Answers URLs starting with `prefix` with a bare status code.
    pub fn with_status(mut self, prefix: &str, status: u16) -> Self {
        self.routes.push((prefix.to_string(), Canned::Status(status)));
        self
    }

    /// Fails URLs starting with `prefix` without a response.
    pub fn with_failure(mut self, prefix: &str, reason: &str) -> Self {
        self.routes
            .push((prefix.to_string(), Canned::Fail(reason.to_string())));
        self
    }

    /// Returns the URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("poisoned").clone()
    }

    fn lookup(&self, url: &str) -> Canned {
        self.requests.lock().expect("poisoned").push(url.to_string());
        self.routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map_or_else(
                || Canned::Fail(format!("no route for {url}")),
                |(_, canned)| canned.clone(),
            )
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        match self.lookup(url) {
            Canned::Body(body) => Ok(body),
            Canned::Status(status) => Err(HistogisError::Transport(format!(
                "HTTP {status} from {url}"
            ))),
            Canned::Fail(reason) => Err(HistogisError::Transport(reason)),
        }
    }

    fn status(&self, url: &str) -> Result<u16> {
        match self.lookup(url) {
            Canned::Body(_) => Ok(200),
            Canned::Status(status) => Ok(status),
            Canned::Fail(reason) => Err(HistogisError::Transport(reason)),
        }
    }
}

/// Reads a file from `tests/data`.
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read(&path).unwrap_or_else(|e| panic!("Could not read {path}: {e}"))
}

/// Creates a client against [`BASE_URL`] backed by `http`.
#[allow(dead_code)]
pub fn mock_client(http: MockHttpClient) -> GazetteerClient<MockHttpClient> {
    GazetteerClient::with_http_client(GazetteerConfig::new().with_base_url(BASE_URL), http)
}

/// Prefix of every spatial lookup URL of [`mock_client`].
#[allow(dead_code)]
pub fn where_was() -> String {
    format!("{BASE_URL}where-was/")
}
