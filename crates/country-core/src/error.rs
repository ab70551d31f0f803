// crates/country-core/src/error.rs
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while talking to the country data source or
/// while driving the directory and detail stores.
///
/// Callers that only care about the coarse outcome should use
/// [`CountryError::kind`] instead of matching on every variant.
#[derive(Debug, Error)]
pub enum CountryError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("no country named '{0}'")]
    NotFound(String),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("response superseded by a newer request")]
    Superseded,
}

/// Coarse classification of a [`CountryError`], used for observable status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport, status, decode or timeout failure.
    LookupFailed,
    /// A name lookup returned zero matches.
    NotFound,
    /// The caller passed something the store cannot accept.
    InvalidInput,
    /// The response belonged to a request that is no longer current.
    Stale,
}

impl CountryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "http")]
            CountryError::Http(_) => ErrorKind::LookupFailed,
            CountryError::Status { .. }
            | CountryError::Json(_)
            | CountryError::InvalidData(_)
            | CountryError::Timeout(_) => ErrorKind::LookupFailed,
            CountryError::NotFound(_) => ErrorKind::NotFound,
            CountryError::UnknownRegion(_) | CountryError::Config(_) => ErrorKind::InvalidInput,
            CountryError::Superseded => ErrorKind::Stale,
        }
    }

    /// True for a discarded stale response, which is not a user-visible failure.
    pub fn is_superseded(&self) -> bool {
        matches!(self, CountryError::Superseded)
    }
}

pub type Result<T> = std::result::Result<T, CountryError>;
