//! Canonical 2D layouts from a public structure database.
//!
//! Lookups are best effort. Every failure ends up as a [`FetchError`] that
//! is logged and otherwise ignored: the drawing falls back to the model's
//! own coordinates.

mod pubchem;
mod worker;

use std::fmt;

#[cfg(feature = "pubchem")]
pub use pubchem::PubChemSource;
pub use pubchem::{parse_record, record_url};
pub use worker::{FetchOutcome, FetchRequest, StructureFetcher};

use crate::structure::Layout2d;

/// Why a structure lookup produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, timeout, truncated body.
    Network(String),
    /// Server answered with a non-success status.
    Status(u16),
    /// The database has no record for this name.
    NotFound(String),
    /// The response body was not a usable record.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::NotFound(name) => write!(f, "no record for {name:?}"),
            Self::Malformed(msg) => write!(f, "malformed record: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Something that can turn a molecule name into a 2D layout.
///
/// Implementations run on the fetch worker thread.
pub trait StructureSource: Send + 'static {
    /// Look up the 2D layout for `name`.
    fn lookup(&self, name: &str) -> Result<Layout2d, FetchError>;
}

impl<F> StructureSource for F
where
    F: Fn(&str) -> Result<Layout2d, FetchError> + Send + 'static,
{
    fn lookup(&self, name: &str) -> Result<Layout2d, FetchError> {
        self(name)
    }
}
