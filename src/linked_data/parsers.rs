//! Per-authority extraction of name and coordinates from an RDF graph.
//!
//! GeoNames publishes latitude and longitude as separate WGS84 literals. The
//! GND and Wikidata both publish a single well-known-text point whose first
//! number is the longitude and whose second is the latitude; the GND signs
//! both numbers (`Point ( +014.286111 +048.306389 )`), Wikidata does not
//! (`Point(14.286111 48.306389)`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{HistogisError, Result};

use super::namespaces::{self, properties};
use super::rdf::RdfGraph;

lazy_static! {
    /// Sign-prefixed `+lng +lat` pair as found in GND `geo:asWKT` values.
    static ref SIGNED_POINT: Regex =
        Regex::new(r"([+-])([0-9.]+)\s+([+-])([0-9.]+)").unwrap();

    /// Unsigned `lng lat` pair as found in Wikidata `wdt:P625` values.
    static ref UNSIGNED_POINT: Regex =
        Regex::new(r"(-?)([0-9.]+)\s+(-?)([0-9.]+)").unwrap();
}

/// Extracts name and coordinates from a GeoNames `about.rdf` graph.
///
/// # Errors
///
/// Returns [`HistogisError::CoordinateExtraction`] if any of `wgs84_pos:lat`,
/// `wgs84_pos:long` or `gn:name` is missing.
pub fn parse_geonames(graph: &RdfGraph) -> Result<Coordinate> {
    let lat = required(graph, properties::LAT, "GeoNames")?;
    let lng = required(graph, properties::LONG, "GeoNames")?;
    let name = required(graph, properties::NAME, "GeoNames")?;

    Ok(finish(name, lat, lng))
}

/// Extracts name and coordinates from a GND `lds.rdf` graph.
///
/// # Errors
///
/// Returns [`HistogisError::CoordinateExtraction`] if the document has no
/// `geo:asWKT` literal, the literal is not a signed coordinate pair, or the
/// preferred place name is missing.
pub fn parse_gnd(graph: &RdfGraph) -> Result<Coordinate> {
    let wkt = graph
        .first_literal(&predicate(properties::AS_WKT)?)
        .ok_or_else(|| no_coordinates("GND"))?;
    let (lng, lat) = split_signed_point(wkt).ok_or_else(|| no_coordinates("GND"))?;
    let name = required(graph, properties::PREFERRED_PLACE_NAME, "GND")?;

    Ok(finish(name, &lat, &lng))
}

/// Extracts name and coordinates from a Wikidata entity graph.
///
/// `qid` is the entity token (e.g. `Q41329`); only the German `rdfs:label` of
/// that entity is accepted as its name.
///
/// # Errors
///
/// Returns [`HistogisError::CoordinateExtraction`] if `wdt:P625` is missing
/// or malformed, or if the entity has no German label.
pub fn parse_wikidata(graph: &RdfGraph, qid: &str) -> Result<Coordinate> {
    let wkt = graph
        .first_literal(&predicate(properties::COORDINATE_LOCATION)?)
        .ok_or_else(|| no_coordinates("Wikidata"))?;
    let (lng, lat) = split_unsigned_point(wkt).ok_or_else(|| no_coordinates("Wikidata"))?;

    let subject = predicate(&format!("wd:{qid}"))?;
    let name = graph
        .literal_for_subject_lang(&subject, &predicate(properties::LABEL)?, "de")
        .ok_or_else(|| {
            HistogisError::CoordinateExtraction(format!(
                "Wikidata entity {qid} has no German label"
            ))
        })?;

    Ok(finish(name, &lat, &lng))
}

/// Splits a sign-prefixed WKT pair into `(longitude, latitude)`.
///
/// `+` signs are dropped and `-` signs kept; leading zeros are trimmed.
#[must_use]
pub fn split_signed_point(wkt: &str) -> Option<(String, String)> {
    SIGNED_POINT.captures(wkt).map(|caps| lng_lat(&caps))
}

/// Splits an unsigned WKT pair into `(longitude, latitude)`.
///
/// A `-` sign is kept when present.
///
/// # Examples
///
/// ```
/// use histogis::linked_data::parsers::split_unsigned_point;
///
/// let (lng, lat) = split_unsigned_point("Point(-3.703790 40.416775)").unwrap();
/// assert_eq!(lng, "-3.703790");
/// assert_eq!(lat, "40.416775");
/// ```
#[must_use]
pub fn split_unsigned_point(wkt: &str) -> Option<(String, String)> {
    UNSIGNED_POINT.captures(wkt).map(|caps| lng_lat(&caps))
}

/// Group pair 1 is the longitude, group pair 2 the latitude.
fn lng_lat(caps: &Captures<'_>) -> (String, String) {
    (
        signed_number(&caps[1], &caps[2]),
        signed_number(&caps[3], &caps[4]),
    )
}

fn signed_number(sign: &str, digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let stripped = digits.len() - trimmed.len();
    let digits = if stripped > 0 && (trimmed.is_empty() || trimmed.starts_with('.')) {
        // keep one zero before the decimal point
        &digits[stripped - 1..]
    } else {
        trimmed
    };
    if sign == "-" {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

fn required<'a>(graph: &'a RdfGraph, qname: &str, authority: &str) -> Result<&'a str> {
    graph.first_literal(&predicate(qname)?).ok_or_else(|| {
        HistogisError::CoordinateExtraction(format!("{authority} RDF has no {qname} value"))
    })
}

fn predicate(qname: &str) -> Result<String> {
    namespaces::expand(qname).ok_or_else(|| {
        HistogisError::CoordinateExtraction(format!("unknown namespace prefix in {qname}"))
    })
}

fn no_coordinates(authority: &str) -> HistogisError {
    HistogisError::CoordinateExtraction(format!("no coordinates in {authority} RDF"))
}

fn finish(name: &str, lat: &str, lng: &str) -> Coordinate {
    debug!(name = name, lat = lat, lng = lng, "Extracted coordinate");
    Coordinate::new(name, lat, lng)
}
