//! Retrieval of authority documents.
//!
//! Each authority has a token pattern, a document URL template and a parser.
//! [`fetch`] runs the three steps for any [`Authority`] through one exhaustive
//! `match`, so adding an authority without a handler does not compile.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::authority::Authority;
use crate::coordinate::Coordinate;
use crate::error::{HistogisError, Result};
use crate::http::HttpClient;

use super::parsers;
use super::rdf::RdfGraph;

lazy_static! {
    static ref GEONAMES_TOKEN: Regex = Regex::new(r"\d+").unwrap();
    static ref GND_TOKEN: Regex = Regex::new(r"\d+[A-Z0-9\-]+").unwrap();
    static ref WIKIDATA_TOKEN: Regex = Regex::new(r"Q\d+").unwrap();
}

/// Extracts the authority-specific ID token from an identifier or URI.
///
/// # Errors
///
/// Returns [`HistogisError::MalformedIdentifier`] if the identifier contains
/// no token of the authority's shape.
///
/// # Examples
///
/// ```
/// use histogis::Authority;
/// use histogis::linked_data::extract_token;
///
/// let token = extract_token(Authority::Gnd, "http://d-nb.info/gnd/4066009-6/about/lds.rdf").unwrap();
/// assert_eq!(token, "4066009-6");
/// assert!(extract_token(Authority::Wikidata, "Linz").is_err());
/// ```
pub fn extract_token(authority: Authority, identifier: &str) -> Result<&str> {
    let pattern: &Regex = match authority {
        Authority::GeoNames => &*GEONAMES_TOKEN,
        Authority::Gnd => &*GND_TOKEN,
        Authority::Wikidata => &*WIKIDATA_TOKEN,
    };

    pattern
        .find(identifier)
        .map(|m| m.as_str())
        .ok_or_else(|| HistogisError::MalformedIdentifier {
            authority,
            identifier: identifier.to_string(),
        })
}

/// Builds the canonical RDF/XML document URL for a token.
///
/// ```
/// use histogis::Authority;
/// use histogis::linked_data::document_url;
///
/// assert_eq!(
///     document_url(Authority::Wikidata, "Q41329"),
///     "https://wikidata.org/entity/Q41329.rdf"
/// );
/// ```
#[must_use]
pub fn document_url(authority: Authority, token: &str) -> String {
    match authority {
        Authority::GeoNames => format!("http://sws.geonames.org/{token}/about.rdf"),
        Authority::Gnd => format!("http://d-nb.info/gnd/{token}/about/lds.rdf"),
        Authority::Wikidata => format!("https://wikidata.org/entity/{token}.rdf"),
    }
}

/// Fetches the linked-data record for `identifier` and extracts its coordinate.
///
/// # Errors
///
/// - [`HistogisError::MalformedIdentifier`] if no ID token is found
/// - [`HistogisError::Transport`] if the document cannot be retrieved
/// - [`HistogisError::RecordParse`] if it is not valid RDF/XML
/// - [`HistogisError::CoordinateExtraction`] if name or coordinates are absent
pub fn fetch<C: HttpClient + ?Sized>(
    http: &C,
    authority: Authority,
    identifier: &str,
) -> Result<Coordinate> {
    let token = extract_token(authority, identifier)?;
    let url = document_url(authority, token);
    debug!(authority = %authority, token = token, url = %url, "Fetching authority record");

    let body = http.get(&url)?;
    let graph = RdfGraph::parse_rdf_xml(body.as_slice(), Some(&url))?;

    match authority {
        Authority::GeoNames => parsers::parse_geonames(&graph),
        Authority::Gnd => parsers::parse_gnd(&graph),
        Authority::Wikidata => parsers::parse_wikidata(&graph, token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geonames_token() {
        assert_eq!(
            extract_token(Authority::GeoNames, "http://www.geonames.org/2772400/linz.html")
                .unwrap(),
            "2772400"
        );
        assert_eq!(extract_token(Authority::GeoNames, "2772400").unwrap(), "2772400");
    }

    #[test]
    fn test_gnd_token_with_check_digit() {
        assert_eq!(
            extract_token(Authority::Gnd, "http://d-nb.info/gnd/4066009-6/about/lds.rdf")
                .unwrap(),
            "4066009-6"
        );
        assert_eq!(extract_token(Authority::Gnd, "4074255-6").unwrap(), "4074255-6");
        assert_eq!(extract_token(Authority::Gnd, "1089894554X").unwrap(), "1089894554X");
    }

    #[test]
    fn test_wikidata_token() {
        assert_eq!(
            extract_token(Authority::Wikidata, "https://www.wikidata.org/entity/Q41329")
                .unwrap(),
            "Q41329"
        );
    }

    #[test]
    fn test_malformed_identifier() {
        let err = extract_token(Authority::Wikidata, "https://www.wikidata.org/wiki/Linz")
            .unwrap_err();
        match err {
            HistogisError::MalformedIdentifier {
                authority,
                identifier,
            } => {
                assert_eq!(authority, Authority::Wikidata);
                assert!(identifier.ends_with("Linz"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_document_urls() {
        assert_eq!(
            document_url(Authority::GeoNames, "2772400"),
            "http://sws.geonames.org/2772400/about.rdf"
        );
        assert_eq!(
            document_url(Authority::Gnd, "4066009-6"),
            "http://d-nb.info/gnd/4066009-6/about/lds.rdf"
        );
        assert_eq!(
            document_url(Authority::Wikidata, "Q41329"),
            "https://wikidata.org/entity/Q41329.rdf"
        );
    }
}
