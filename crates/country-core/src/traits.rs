// crates/country-core/src/traits.rs
use crate::error::Result;
use crate::model::{CountryDetail, CountrySummary, Region};
use crate::text::fold_key;
use async_trait::async_trait;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use country_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Côte d'Ivoire").is_named("cote d'ivoire"));
/// assert!(Place("Peru").name_contains("PER"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Substring match on the folded form. An empty query matches.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for CountrySummary {
    fn name_str(&self) -> &str {
        &self.common_name
    }
}

impl NameMatch for CountryDetail {
    fn name_str(&self) -> &str {
        &self.summary.common_name
    }
}

/// The four read-only lookups the core needs from the remote data source.
///
/// Implementations must turn every transport, status or decode problem into
/// an `Err`; a partially decoded batch is never returned.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// The full country collection.
    async fn fetch_all(&self) -> Result<Vec<CountrySummary>>;

    /// Countries whose region is `region`.
    async fn fetch_by_region(&self, region: Region) -> Result<Vec<CountrySummary>>;

    /// Countries whose common or official name matches `name`.
    ///
    /// With `exact` the whole name must match; otherwise partial matches are
    /// returned too. Zero matches is `Ok(vec![])`.
    async fn fetch_by_name(&self, name: &str, exact: bool) -> Result<Vec<CountryDetail>>;

    /// One round trip for all `codes`; unresolvable codes are simply absent.
    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<CountryDetail>>;
}
