#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # histogis: HistoGIS gazetteer client
//!
//! A Rust client for the HistoGIS spatio-temporal gazetteer, answering
//! "which territory contained this point on this date?", directly from
//! coordinates or from GeoNames, GND and Wikidata identifiers.
//!
//! ## Quick Start
//!
//! ### Looking up a point
//!
//! ```ignore
//! use histogis::{GazetteerClient, LookupOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GazetteerClient::new()?;
//! let result = client.query("48.2894", "14.304", &LookupOptions::new().with_when("1860-12-12"))?;
//! if let Some(name) = result.get("name") {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Resolving an identifier
//!
//! ```ignore
//! use histogis::{Authority, GazetteerClient, LookupOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GazetteerClient::new()?;
//!
//! // Authority inferred from the URI
//! let linz = client.resolve("https://www.geonames.org/2772400/", None, &LookupOptions::new())?;
//!
//! // Bare token with a declared authority, full feature collection
//! let wien = client.resolve(
//!     "Q1741",
//!     Some(Authority::Wikidata),
//!     &LookupOptions::new().without_when().with_polygon(true),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: The gazetteer client (`GazetteerClient`)
//! - [`authority`]: Identifier authorities and their classification
//! - [`linked_data`]: Fetching and parsing linked-data authority records
//! - [`spatial`]: Point-in-time lookup and result normalization
//! - [`export`]: Bulk dataset dumps
//! - [`config`]: Client configuration
//! - [`http`]: HTTP transport abstraction
//! - [`coordinate`]: Named points
//! - [`error`]: Error types and result type

pub mod authority;
pub mod client;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod export;
pub mod http;
pub mod linked_data;
pub mod spatial;

pub use authority::{Authority, AuthorityTable, AUTHORITY_TABLE};
pub use client::GazetteerClient;
pub use config::GazetteerConfig;
pub use coordinate::Coordinate;
pub use error::{HistogisError, Result};
pub use http::{HttpClient, ReqwestClient};
pub use spatial::{LookupOptions, SpatialResult};
