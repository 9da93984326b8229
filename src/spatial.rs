//! Point-in-time spatial lookup against the gazetteer.
//!
//! A lookup asks the `where-was` endpoint which territories contained a point
//! on a given date. The response is a paginated GeoJSON feature collection.
//! Unless the caller asks for the whole collection (`polygon`), only the
//! properties of the first feature are returned, and an empty collection is
//! reported as [`SpatialResult::Empty`] rather than as an error.

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use tracing::debug;
use url::Url;

use crate::error::{HistogisError, Result};
use crate::http::HttpClient;

lazy_static! {
    static ref EMPTY_RESULT: Value = empty_result();
}

/// Date used when a lookup does not specify one.
pub const DEFAULT_WHEN: &str = "1860-12-12";

/// Returns the canonical "no match" payload.
///
/// ```
/// let empty = histogis::spatial::empty_result();
/// assert_eq!(empty["count"], 0);
/// assert_eq!(empty["features"], serde_json::json!([]));
/// assert!(empty["next"].is_null());
/// assert_eq!(empty["type"], "FeatureCollection");
/// ```
#[must_use]
pub fn empty_result() -> Value {
    json!({
        "count": 0,
        "features": [],
        "next": null,
        "previous": null,
        "type": "FeatureCollection",
    })
}

/// Options of a spatial lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    /// ISO-8601 date forwarded as `when`; `None` leaves the date unconstrained.
    pub when: Option<String>,
    /// Return the full feature collection instead of the first match.
    pub polygon: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            when: Some(DEFAULT_WHEN.to_string()),
            polygon: false,
        }
    }
}

impl LookupOptions {
    /// Creates options with the default date and without polygons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookup date. The value is not validated locally.
    #[must_use]
    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = Some(when.into());
        self
    }

    /// Removes the date constraint.
    #[must_use]
    pub fn without_when(mut self) -> Self {
        self.when = None;
        self
    }

    /// Selects whether the full feature collection is returned.
    #[must_use]
    pub const fn with_polygon(mut self, polygon: bool) -> Self {
        self.polygon = polygon;
        self
    }
}

/// Normalized result of a spatial lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialResult {
    /// Properties of the first matching feature.
    Match(Map<String, Value>),
    /// No feature contains the point at that time.
    Empty,
    /// The unmodified response body, returned in polygon mode.
    Collection(Value),
}

impl SpatialResult {
    /// Returns true for a matched feature.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Returns true for the empty sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the matched feature's properties.
    #[must_use]
    pub const fn properties(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Match(props) => Some(props),
            _ => None,
        }
    }

    /// Returns true if the JSON view of this result has top-level key `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a top-level key of the JSON view of this result.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Match(props) => props.get(key),
            Self::Empty => EMPTY_RESULT.get(key),
            Self::Collection(value) => value.get(key),
        }
    }

    /// Returns the JSON view of this result.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Converts this result into its JSON view.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Match(props) => Value::Object(props),
            Self::Empty => empty_result(),
            Self::Collection(value) => value,
        }
    }
}

impl Serialize for SpatialResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Match(props) => props.serialize(serializer),
            Self::Empty => EMPTY_RESULT.serialize(serializer),
            Self::Collection(value) => value.serialize(serializer),
        }
    }
}

/// Issues point-in-time queries against a `where-was` endpoint.
#[derive(Debug)]
pub struct SpatialLookupClient<'a, C: ?Sized> {
    http: &'a C,
    endpoint: &'a str,
}

impl<'a, C: HttpClient + ?Sized> SpatialLookupClient<'a, C> {
    /// Creates a lookup client for `endpoint` using `http` as transport.
    #[must_use]
    pub const fn new(http: &'a C, endpoint: &'a str) -> Self {
        Self { http, endpoint }
    }

    /// Builds the lookup URL for a point and optional date.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] if the endpoint is not a valid URL.
    pub fn lookup_url(&self, lat: &str, lng: &str, when: Option<&str>) -> Result<Url> {
        let mut params = vec![("lat", lat), ("lng", lng)];
        if let Some(when) = when {
            params.push(("when", when));
        }
        params.push(("format", "json"));

        Url::parse_with_params(self.endpoint, &params).map_err(|e| {
            HistogisError::Transport(format!("Invalid lookup endpoint {}: {e}", self.endpoint))
        })
    }

    /// Queries the gazetteer for the territory containing a point.
    ///
    /// `lat` and `lng` are decimal strings forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::Transport`] on network failure, error status,
    /// or a body that is not a feature collection. An empty collection is not
    /// an error.
    pub fn query(&self, lat: &str, lng: &str, options: &LookupOptions) -> Result<SpatialResult> {
        let url = self.lookup_url(lat, lng, options.when.as_deref())?;
        debug!(url = %url, polygon = options.polygon, "Spatial lookup");
        let body = self.http.get(url.as_str())?;
        normalize(&body, options.polygon)
    }

    /// Queries with floating point coordinates.
    ///
    /// # Errors
    ///
    /// See [`SpatialLookupClient::query`].
    pub fn query_point(&self, lat: f64, lng: f64, options: &LookupOptions) -> Result<SpatialResult> {
        self.query(&lat.to_string(), &lng.to_string(), options)
    }
}

/// Shapes a raw lookup response body.
///
/// # Errors
///
/// Returns [`HistogisError::Transport`] if the body is not JSON, or, outside
/// polygon mode, has no `features` array or a first feature without
/// `properties`.
pub fn normalize(body: &[u8], polygon: bool) -> Result<SpatialResult> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| HistogisError::Transport(format!("Undecodable lookup response: {e}")))?;

    if polygon {
        return Ok(SpatialResult::Collection(value));
    }

    let features = value
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            HistogisError::Transport("Lookup response has no features array".to_string())
        })?;

    let Some(first) = features.first() else {
        return Ok(SpatialResult::Empty);
    };

    first
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .map(SpatialResult::Match)
        .ok_or_else(|| HistogisError::Transport("Matched feature has no properties".to_string()))
}
