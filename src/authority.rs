//! External identifier authorities and their classification.
//!
//! An [`Authority`] is one of the three linked-data services whose
//! identifiers can be turned into coordinates. The [`AuthorityTable`] infers
//! the authority of an identifier that was passed without one, by looking for
//! a known domain fragment inside it.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::HistogisError;

/// The closed set of supported identifier authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    /// GeoNames geographic name registry (`geonames.org`).
    GeoNames,
    /// Gemeinsame Normdatei of the German National Library (`d-nb.info`).
    Gnd,
    /// Wikidata entities (`wikidata.org`).
    Wikidata,
}

impl Authority {
    /// All authorities, in classification order.
    pub const ALL: [Self; 3] = [Self::GeoNames, Self::Gnd, Self::Wikidata];

    /// Returns the short name used to declare this authority explicitly.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GeoNames => "geonames",
            Self::Gnd => "gnd",
            Self::Wikidata => "wikidata",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Authority {
    type Err = HistogisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geonames" => Ok(Self::GeoNames),
            "gnd" => Ok(Self::Gnd),
            "wikidata" => Ok(Self::Wikidata),
            _ => Err(HistogisError::UnsupportedAuthority(s.to_string())),
        }
    }
}

/// Ordered mapping from identifier domain fragment to authority.
///
/// The first fragment that occurs as a substring of an identifier decides its
/// authority. Fragments must not overlap in a way that changes the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityTable {
    entries: Vec<(&'static str, Authority)>,
}

impl Default for AuthorityTable {
    fn default() -> Self {
        Self {
            entries: vec![
                ("geonames", Authority::GeoNames),
                ("d-nb", Authority::Gnd),
                ("wikidata", Authority::Wikidata),
            ],
        }
    }
}

lazy_static! {
    /// Process-wide authority table, shared by every client.
    pub static ref AUTHORITY_TABLE: AuthorityTable = AuthorityTable::default();
}

impl AuthorityTable {
    /// Infers the authority of `identifier`.
    ///
    /// Returns `None` when no known fragment occurs in the identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use histogis::authority::{Authority, AuthorityTable};
    ///
    /// let table = AuthorityTable::default();
    /// assert_eq!(
    ///     table.classify("https://www.geonames.org/2772400/linz.html"),
    ///     Some(Authority::GeoNames)
    /// );
    /// assert_eq!(table.classify("2772400"), None);
    /// ```
    #[must_use]
    pub fn classify(&self, identifier: &str) -> Option<Authority> {
        self.entries
            .iter()
            .find(|(fragment, _)| identifier.contains(fragment))
            .map(|(_, authority)| *authority)
    }

    /// Returns the declared authority if any, otherwise the inferred one.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::UnsupportedAuthority`] if nothing was declared
    /// and classification fails.
    pub fn resolve(
        &self,
        identifier: &str,
        declared: Option<Authority>,
    ) -> Result<Authority, HistogisError> {
        declared
            .or_else(|| self.classify(identifier))
            .ok_or_else(|| HistogisError::UnsupportedAuthority(identifier.to_string()))
    }

    /// Iterates over the (fragment, authority) pairs in match order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Authority)> + '_ {
        self.entries.iter().copied()
    }
}
