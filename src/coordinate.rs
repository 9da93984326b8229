//! Named point extracted from a linked-data authority record.

use serde::{Deserialize, Serialize};

/// A display name with latitude and longitude.
///
/// Latitude and longitude keep the decimal text found in the source document,
/// so no precision is lost before the values are forwarded to the gazetteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Display name of the place.
    pub name: String,
    /// Latitude as decimal text.
    pub lat: String,
    /// Longitude as decimal text.
    pub lng: String,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub fn new(name: impl Into<String>, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Parses the latitude, if it is a valid number.
    #[must_use]
    pub fn lat_f64(&self) -> Option<f64> {
        self.lat.trim().parse().ok()
    }

    /// Parses the longitude, if it is a valid number.
    #[must_use]
    pub fn lng_f64(&self) -> Option<f64> {
        self.lng.trim().parse().ok()
    }
}
