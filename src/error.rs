//! Error types for gazetteer operations.
//!
//! This module provides the [`HistogisError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

use crate::authority::Authority;

/// Error type for all HistoGIS client operations.
///
/// Represents the failure modes of identifier resolution, linked-data
/// extraction, spatial lookup and bulk export. An empty spatial match is not
/// an error; see [`crate::spatial::SpatialResult::Empty`].
#[derive(Error, Debug)]
pub enum HistogisError {
    /// No authority was declared and none could be inferred from the identifier.
    #[error("Unsupported authority for identifier: {0}")]
    UnsupportedAuthority(String),

    /// The authority is known but the identifier carries no usable ID token.
    #[error("Malformed {authority} identifier: {identifier}")]
    MalformedIdentifier {
        /// Authority the identifier was dispatched to.
        authority: Authority,
        /// The identifier as passed in.
        identifier: String,
    },

    /// The linked-data document was retrieved but lacks name or coordinates.
    #[error("Coordinate extraction failed: {0}")]
    CoordinateExtraction(String),

    /// The linked-data document could not be parsed as RDF/XML.
    #[error("Record parse error: {0}")]
    RecordParse(String),

    /// Network failure, non-success status, or undecodable response body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Exported data did not have the shape needed to write it out.
    #[error("Export error: {0}")]
    Export(String),

    /// IO error from a local export file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`HistogisError`].
pub type Result<T> = std::result::Result<T, HistogisError>;
