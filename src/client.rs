//! The gazetteer client, tying identifier resolution to spatial lookup.

use serde_json::Value;
use tracing::{debug, warn};

use crate::authority::{Authority, AuthorityTable, AUTHORITY_TABLE};
use crate::config::GazetteerConfig;
use crate::coordinate::Coordinate;
use crate::error::{HistogisError, Result};
use crate::http::{HttpClient, ReqwestClient};
use crate::linked_data;
use crate::spatial::{LookupOptions, SpatialLookupClient, SpatialResult};

/// Client for the HistoGIS gazetteer.
///
/// Holds the configuration, the HTTP transport and the authority table. None
/// of them change after construction, so a client can be shared between
/// threads whenever its transport can.
///
/// # Examples
///
/// ```ignore
/// use histogis::{GazetteerClient, LookupOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GazetteerClient::new()?;
/// let territory = client.resolve(
///     "https://www.geonames.org/2772400/",
///     None,
///     &LookupOptions::new().with_when("1860-12-12"),
/// )?;
/// if let Some(name) = territory.get("name") {
///     println!("Linz was in {name} in 1860");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GazetteerClient<C = ReqwestClient> {
    config: GazetteerConfig,
    http: C,
    authorities: &'static AuthorityTable,
    query_endpoint: String,
    list_endpoint: String,
}

impl GazetteerClient<ReqwestClient> {
    /// Creates a client for the public HistoGIS service.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(GazetteerConfig::default())
    }

    /// Creates a client using the reqwest transport configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the HTTP client cannot be built.
    pub fn with_config(config: GazetteerConfig) -> Result<Self> {
        let http = ReqwestClient::new(config.user_agent(), config.timeout())?;
        Ok(Self::with_http_client(config, http))
    }
}

impl<C: HttpClient> GazetteerClient<C> {
    /// Creates a client with a caller-supplied transport.
    #[must_use]
    pub fn with_http_client(config: GazetteerConfig, http: C) -> Self {
        Self {
            query_endpoint: config.query_endpoint(),
            list_endpoint: config.list_endpoint(),
            config,
            http,
            authorities: &*AUTHORITY_TABLE,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GazetteerConfig {
        &self.config
    }

    /// Returns the HTTP transport.
    #[must_use]
    pub const fn http(&self) -> &C {
        &self.http
    }

    /// Returns the process-wide authority table used for classification.
    #[must_use]
    pub const fn authorities(&self) -> &'static AuthorityTable {
        self.authorities
    }

    /// Returns the URL of the first listing page.
    #[must_use]
    pub fn list_endpoint(&self) -> &str {
        &self.list_endpoint
    }

    /// Returns the spatial lookup URL.
    #[must_use]
    pub fn query_endpoint(&self) -> &str {
        &self.query_endpoint
    }

    /// Reports whether the service base URL answers with status 200.
    ///
    /// Transport failures are logged and reported as `false`.
    #[must_use]
    pub fn check_reachable(&self) -> bool {
        let url = self.config.base_url();
        match self.http.status(url) {
            Ok(200) => true,
            Ok(status) => {
                warn!(url = url, status = status, "Gazetteer not reachable");
                false
            },
            Err(e) => {
                warn!(url = url, error = %e, "Gazetteer not reachable");
                false
            },
        }
    }

    /// Returns the number of features the service holds.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the listing cannot be fetched
    /// or has no numeric `count`.
    pub fn count(&self) -> Result<u64> {
        let page = self.get_json(&self.list_endpoint)?;
        page.get("count").and_then(Value::as_u64).ok_or_else(|| {
            HistogisError::Transport("Listing response has no numeric count".to_string())
        })
    }

    /// Looks up the territory containing a point, see [`SpatialLookupClient::query`].
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] on any transport or decoding failure.
    pub fn query(&self, lat: &str, lng: &str, options: &LookupOptions) -> Result<SpatialResult> {
        self.spatial().query(lat, lng, options)
    }

    /// Looks up the territory containing a floating point coordinate.
    ///
    /// # Errors
    ///
    /// See [`GazetteerClient::query`].
    pub fn query_point(&self, lat: f64, lng: f64, options: &LookupOptions) -> Result<SpatialResult> {
        self.spatial().query_point(lat, lng, options)
    }

    /// Fetches the coordinate behind an identifier of a known authority.
    ///
    /// # Errors
    ///
    /// See [`linked_data::fetch`].
    pub fn fetch(&self, authority: Authority, identifier: &str) -> Result<Coordinate> {
        linked_data::fetch(&self.http, authority, identifier)
    }

    /// Fetches the coordinate of a GeoNames identifier.
    ///
    /// # Errors
    ///
    /// See [`linked_data::fetch`].
    pub fn fetch_geonames(&self, identifier: &str) -> Result<Coordinate> {
        self.fetch(Authority::GeoNames, identifier)
    }

    /// Fetches the coordinate of a GND identifier.
    ///
    /// # Errors
    ///
    /// See [`linked_data::fetch`].
    pub fn fetch_gnd(&self, identifier: &str) -> Result<Coordinate> {
        self.fetch(Authority::Gnd, identifier)
    }

    /// Fetches the coordinate of a Wikidata identifier.
    ///
    /// # Errors
    ///
    /// See [`linked_data::fetch`].
    pub fn fetch_wikidata(&self, identifier: &str) -> Result<Coordinate> {
        self.fetch(Authority::Wikidata, identifier)
    }

    /// Resolves an authority identifier to the territory containing it.
    ///
    /// With `authority` unset, the authority is inferred from the identifier.
    ///
    /// # Errors
    ///
    /// - [`HistogisError::UnsupportedAuthority`] if no authority applies
    /// - any error of [`GazetteerClient::fetch`] or [`GazetteerClient::query`]
    pub fn resolve(
        &self,
        identifier: &str,
        authority: Option<Authority>,
        options: &LookupOptions,
    ) -> Result<SpatialResult> {
        let authority = self.authorities.resolve(identifier, authority)?;
        let coord = self.fetch(authority, identifier)?;
        debug!(
            identifier = identifier,
            authority = %authority,
            name = %coord.name,
            "Resolved identifier"
        );
        self.query(&coord.lat, &coord.lng, options)
    }

    /// Fetches a URL and decodes the body as JSON.
    pub(crate) fn get_json(&self, url: &str) -> Result<Value> {
        let body = self.http.get(url)?;
        serde_json::from_slice(&body)
            .map_err(|e| HistogisError::Transport(format!("Undecodable response from {url}: {e}")))
    }

    fn spatial(&self) -> SpatialLookupClient<'_, C> {
        SpatialLookupClient::new(&self.http, &self.query_endpoint)
    }
}
