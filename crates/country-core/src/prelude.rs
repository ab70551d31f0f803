//! country-core prelude: bring common types and traits into scope for front ends.

#![allow(unused_imports)]

pub use super::common::LoadStatus;
pub use super::config::ClientConfig;
pub use super::detail::{resolve_borders, BorderStatus, DetailResolver, DetailState};
pub use super::directory::{Directory, DirectoryState, ListView, LoadScope};
pub use super::error::{CountryError, ErrorKind, Result};
pub use super::filter::{apply_filter, FilterState};
pub use super::memory::{Capability, InMemorySource};
pub use super::model::{CountryDetail, CountrySummary, Currency, Language, NativeName, Region};
pub use super::traits::{CountrySource, NameMatch};
pub use super::view::{DetailView, Field, SummaryView};

#[cfg(feature = "http")]
pub use super::client::RestCountriesClient;
