// crates/country-core/src/lib.rs

//! # country-core
//!
//! The country data layer of a browse/search/drill-down client:
//!
//! - [`directory`]: the full list, the search text, the region filter and
//!   the derived visible list.
//! - [`detail`]: one focal country plus its neighbours, resolved with a
//!   second batched lookup.
//!
//! Both talk to the remote data source only through [`CountrySource`].
//! [`RestCountriesClient`] implements it over HTTP (feature `http`),
//! [`InMemorySource`] over a fixed dataset.

pub mod common;
pub mod config;
pub mod convert;
pub mod detail;
pub mod directory;
pub mod error;
pub mod filter;
pub mod memory;
pub mod model;
pub mod prelude;
// Wire format of the upstream API
#[doc(hidden)]
pub mod raw;
pub mod text;
pub mod traits;
pub mod view;

#[cfg(feature = "http")]
pub mod client;

// Re-exports
pub use crate::common::LoadStatus;
pub use crate::config::ClientConfig;
pub use crate::detail::{BorderStatus, DetailResolver, DetailState};
pub use crate::directory::{Directory, DirectoryState, ListView, LoadScope};
pub use crate::error::{CountryError, ErrorKind, Result};
pub use crate::filter::{apply_filter, FilterState};
pub use crate::memory::InMemorySource;
pub use crate::model::{CountryDetail, CountrySummary, Region};
pub use crate::traits::CountrySource;

#[cfg(feature = "http")]
pub use crate::client::RestCountriesClient;
