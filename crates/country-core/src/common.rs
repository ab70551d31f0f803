// crates/country-core/src/common.rs
use crate::error::{CountryError, ErrorKind, Result};
use std::future::Future;
use std::time::Duration;

/// Observable lifecycle of a load, read by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(ErrorKind),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadStatus::Error(_))
    }
}

/// Monotonic request tag used to recognise stale responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seq(pub(crate) u64);

impl Seq {
    pub(crate) fn bump(&mut self) -> Seq {
        self.0 += 1;
        *self
    }
}

/// Runs `fut` with an upper bound; expiry becomes [`CountryError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => Err(CountryError::Timeout(limit)),
    }
}
