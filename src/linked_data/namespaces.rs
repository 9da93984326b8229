//! Namespace definitions for the linked-data authority documents.
//!
//! Each constant is the IRI a prefix stands for in the RDF/XML documents
//! served by GeoNames, the GND and Wikidata. Extraction names properties as
//! `prefix:local` and resolves them through [`PREFIXES`] with [`expand`].

/// WGS84 basic geo vocabulary (`wgs84_pos:`).
pub const WGS84_POS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

/// GeoNames ontology (`gn:`).
pub const GN: &str = "http://www.geonames.org/ontology#";

/// RDF namespace (`rdf:`).
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace (`rdfs:`).
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// TEI namespace (`tei:`).
pub const TEI: &str = "http://www.tei-c.org/ns/1.0";

/// XML namespace (`xml:`).
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// GeoSPARQL ontology (`geo:`).
pub const GEO: &str = "http://www.opengis.net/ont/geosparql#";

/// GND ontology (`gndo:`).
pub const GNDO: &str = "http://d-nb.info/standards/elementset/gnd#";

/// Wikidata direct properties (`wdt:`).
pub const WDT: &str = "http://www.wikidata.org/prop/direct/";

/// Wikidata entities (`wd:`).
pub const WD: &str = "http://www.wikidata.org/entity/";

/// Prefix table, in the order the prefixes are conventionally declared.
pub const PREFIXES: [(&str, &str); 10] = [
    ("wgs84_pos", WGS84_POS),
    ("gn", GN),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("tei", TEI),
    ("xml", XML),
    ("geo", GEO),
    ("gndo", GNDO),
    ("wdt", WDT),
    ("wd", WD),
];

/// Prefixed property names used during extraction.
pub mod properties {
    /// GeoNames latitude.
    pub const LAT: &str = "wgs84_pos:lat";
    /// GeoNames longitude.
    pub const LONG: &str = "wgs84_pos:long";
    /// GeoNames place name.
    pub const NAME: &str = "gn:name";
    /// GND well-known-text geometry.
    pub const AS_WKT: &str = "geo:asWKT";
    /// GND preferred place name.
    pub const PREFERRED_PLACE_NAME: &str = "gndo:preferredNameForThePlaceOrGeographicName";
    /// Wikidata coordinate location.
    pub const COORDINATE_LOCATION: &str = "wdt:P625";
    /// Entity label.
    pub const LABEL: &str = "rdfs:label";
}

/// Joins a namespace and a local name into a full IRI.
#[must_use]
pub fn iri(namespace: &str, local: &str) -> String {
    format!("{namespace}{local}")
}

/// Expands a `prefix:local` name against [`PREFIXES`].
///
/// Returns `None` for an unknown prefix or a name without a colon.
///
/// # Examples
///
/// ```
/// use histogis::linked_data::namespaces::{expand, properties};
///
/// assert_eq!(
///     expand(properties::LAT).as_deref(),
///     Some("http://www.w3.org/2003/01/geo/wgs84_pos#lat")
/// );
/// assert_eq!(expand("foaf:name"), None);
/// ```
#[must_use]
pub fn expand(qname: &str) -> Option<String> {
    let (prefix, local) = qname.split_once(':')?;
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| iri(ns, local))
}
