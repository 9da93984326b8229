//! Linked-data authority records.
//!
//! GeoNames, the GND and Wikidata all describe places as RDF/XML documents.
//! This module turns an identifier from one of them into a
//! [`Coordinate`](crate::Coordinate):
//!
//! 1. extract the ID token from the identifier ([`extract_token`])
//! 2. build the document URL ([`document_url`])
//! 3. retrieve and parse the document into an [`RdfGraph`]
//! 4. apply the authority's extraction rule (see [`parsers`])
//!
//! # Quick Start
//!
//! ```ignore
//! use histogis::{Authority, ReqwestClient};
//! use histogis::linked_data::fetch;
//!
//! let http = ReqwestClient::new("example/1.0", None)?;
//! let linz = fetch(&http, Authority::GeoNames, "https://www.geonames.org/2772400/")?;
//! println!("{} at {}, {}", linz.name, linz.lat, linz.lng);
//! ```
//!
//! # Modules
//!
//! - `namespaces`: prefix table of the authority vocabularies
//! - `rdf`: RDF graph representation and RDF/XML parsing
//! - `parsers`: per-authority field extraction
//! - `fetcher`: token patterns, URL templates and dispatch

mod fetcher;
pub mod namespaces;
pub mod parsers;
mod rdf;

pub use fetcher::{document_url, extract_token, fetch};
pub use rdf::{RdfGraph, RdfNode, RdfTriple};
