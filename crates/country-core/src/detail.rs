// crates/country-core/src/detail.rs

//! # Detail Resolver
//!
//! Resolves one focal country by name, then joins its border codes against
//! a second, batched lookup. Both stages are ticketed like the directory:
//! a response whose ticket no longer matches the current navigation is
//! discarded instead of being applied to the wrong country.

use crate::common::{with_timeout, LoadStatus, Seq};
use crate::config::ClientConfig;
use crate::error::{CountryError, Result};
use crate::model::{CountryDetail, CountrySummary};
use crate::traits::CountrySource;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tagged name lookup for the focal country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    seq: Seq,
    name: String,
}

impl DetailTicket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn fetch<S>(&self, source: &S, exact: bool, limit: Duration) -> Result<Vec<CountryDetail>>
    where
        S: CountrySource + ?Sized,
    {
        with_timeout(limit, source.fetch_by_name(&self.name, exact)).await
    }
}

/// Tagged batch lookup for the focal country's neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTicket {
    seq: Seq,
    codes: Vec<String>,
}

impl BorderTicket {
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// One request for all codes, never one per code.
    pub async fn fetch<S>(&self, source: &S, limit: Duration) -> Result<Vec<CountryDetail>>
    where
        S: CountrySource + ?Sized,
    {
        with_timeout(limit, source.fetch_by_codes(&self.codes)).await
    }
}

/// Border section state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BorderStatus {
    /// No focal country yet, or the focal lookup failed.
    #[default]
    Idle,
    Loading,
    /// The focal country has no land borders. Not an error.
    None,
    Loaded(Vec<CountrySummary>),
    /// The batch lookup failed; the focal detail stays valid.
    Failed,
}

impl BorderStatus {
    /// Resolved neighbours, empty unless loaded.
    pub fn countries(&self) -> &[CountrySummary] {
        match self {
            BorderStatus::Loaded(v) => v,
            _ => &[],
        }
    }
}

#[derive(Debug, Default)]
pub struct DetailState {
    name: Option<String>,
    focal: Option<CountryDetail>,
    /// How many records the name lookup returned; >1 means the name was ambiguous.
    match_count: usize,
    borders: BorderStatus,
    status: LoadStatus,
    last_error: Option<String>,
    seq: Seq,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation target currently being shown or loaded.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn focal(&self) -> Option<&CountryDetail> {
        self.focal.as_ref()
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn borders(&self) -> &BorderStatus {
        &self.borders
    }

    pub fn border_countries(&self) -> &[CountrySummary] {
        self.borders.countries()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Navigates to `name`, invalidating every request issued before.
    pub fn begin(&mut self, name: impl Into<String>) -> DetailTicket {
        let name = name.into();
        let seq = self.seq.bump();
        debug!(seq = seq.0, name = %name, "country detail requested");

        self.name = Some(name.clone());
        self.focal = None;
        self.match_count = 0;
        self.borders = BorderStatus::Idle;
        self.status = LoadStatus::Loading;
        self.last_error = None;
        DetailTicket { seq, name }
    }

    /// Applies the name lookup.
    ///
    /// The first record wins when several share the name. Returns the border
    /// ticket to run next, or `None` when the country has no land borders.
    pub fn complete_detail(
        &mut self,
        ticket: &DetailTicket,
        result: Result<Vec<CountryDetail>>,
    ) -> Result<Option<BorderTicket>> {
        if ticket.seq != self.seq {
            debug!(seq = ticket.seq.0, name = %ticket.name, "discarding stale country detail");
            return Err(CountryError::Superseded);
        }

        let matches = match result {
            Ok(m) => m,
            Err(e) => return Err(self.fail(e)),
        };
        self.match_count = matches.len();
        let Some(focal) = matches.into_iter().next() else {
            return Err(self.fail(CountryError::NotFound(ticket.name.clone())));
        };
        if self.match_count > 1 {
            debug!(
                name = %ticket.name,
                matches = self.match_count,
                chosen = %focal.country_code,
                "ambiguous name, using first match"
            );
        }

        self.status = LoadStatus::Loaded;
        let codes = focal.border_codes.clone();
        self.focal = Some(focal);

        if codes.is_empty() {
            self.borders = BorderStatus::None;
            return Ok(None);
        }
        self.borders = BorderStatus::Loading;
        Ok(Some(BorderTicket {
            seq: ticket.seq,
            codes,
        }))
    }

    /// Applies the border lookup. A failure only affects the border section.
    pub fn complete_borders(
        &mut self,
        ticket: &BorderTicket,
        result: Result<Vec<CountryDetail>>,
    ) -> Result<&[CountrySummary]> {
        if ticket.seq != self.seq || self.borders != BorderStatus::Loading {
            debug!(seq = ticket.seq.0, "discarding stale border lookup");
            return Err(CountryError::Superseded);
        }

        match result {
            Ok(records) => {
                let own = self.focal.as_ref().map(|f| f.country_code.as_str());
                let neighbours = dedup_borders(records, own);
                debug!(seq = ticket.seq.0, count = neighbours.len(), "borders applied");
                self.borders = BorderStatus::Loaded(neighbours);
                Ok(self.borders.countries())
            }
            Err(e) => {
                warn!(seq = ticket.seq.0, error = %e, "border lookup failed");
                self.borders = BorderStatus::Failed;
                Err(e)
            }
        }
    }

    fn fail(&mut self, e: CountryError) -> CountryError {
        warn!(name = ?self.name, error = %e, "country detail failed");
        self.status = LoadStatus::Error(e.kind());
        self.last_error = Some(e.to_string());
        self.borders = BorderStatus::Idle;
        e
    }
}

/// One entry per country code, first occurrence kept, response order kept.
///
/// `own_code` is dropped so a country never lists itself.
pub fn dedup_borders(records: Vec<CountryDetail>, own_code: Option<&str>) -> Vec<CountrySummary> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| own_code != Some(r.country_code.as_str()))
        .filter(|r| seen.insert(r.country_code.clone()))
        .map(CountryDetail::into_summary)
        .collect()
}

/// Resolves `detail`'s neighbours in at most one request.
///
/// No border codes means no request and an empty result.
pub async fn resolve_borders<S>(
    source: &S,
    detail: &CountryDetail,
    limit: Duration,
) -> Result<Vec<CountrySummary>>
where
    S: CountrySource + ?Sized,
{
    if !detail.has_borders() {
        return Ok(Vec::new());
    }
    let records = with_timeout(limit, source.fetch_by_codes(&detail.border_codes)).await?;
    Ok(dedup_borders(records, Some(&detail.country_code)))
}

/// [`DetailState`] bound to a source, for sequential callers.
pub struct DetailResolver<S: ?Sized> {
    state: DetailState,
    source: Arc<S>,
    config: ClientConfig,
}

impl<S: CountrySource + ?Sized> DetailResolver<S> {
    pub fn new(source: Arc<S>, config: ClientConfig) -> Self {
        Self {
            state: DetailState::new(),
            source,
            config,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DetailState {
        &mut self.state
    }

    /// Loads the focal country for `name` and then its borders.
    ///
    /// A failed border lookup is logged and reflected in
    /// [`DetailState::borders`] but does not fail this call.
    pub async fn load_detail(&mut self, name: &str) -> Result<&CountryDetail> {
        let limit = self.config.request_timeout();
        let ticket = self.state.begin(name);
        let result = ticket
            .fetch(self.source.as_ref(), self.config.exact_name_match(), limit)
            .await;

        if let Some(borders) = self.state.complete_detail(&ticket, result)? {
            let result = borders.fetch(self.source.as_ref(), limit).await;
            if let Err(e) = self.state.complete_borders(&borders, result) {
                debug!(error = %e, "continuing without borders");
            }
        }

        self.state
            .focal()
            .ok_or_else(|| CountryError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn detail(name: &str, code: &str, borders: &[&str]) -> CountryDetail {
        CountryDetail {
            summary: CountrySummary::named(name, name),
            native_names: Default::default(),
            currencies: Default::default(),
            languages: Vec::new(),
            top_level_domains: Vec::new(),
            border_codes: borders.iter().map(|b| b.to_string()).collect(),
            country_code: code.to_string(),
        }
    }

    #[test]
    fn first_match_becomes_focal() {
        let mut state = DetailState::new();
        let t = state.begin("Canada");
        let next = state
            .complete_detail(
                &t,
                Ok(vec![
                    detail("Canada", "CAN", &["USA"]),
                    detail("Canada", "XCA", &[]),
                ]),
            )
            .unwrap();

        assert_eq!(state.focal().unwrap().country_code, "CAN");
        assert_eq!(state.match_count(), 2);
        assert_eq!(next.unwrap().codes().to_vec(), vec!["USA".to_string()]);
        assert_eq!(state.borders(), &BorderStatus::Loading);
    }

    #[test]
    fn empty_lookup_is_not_found() {
        let mut state = DetailState::new();
        let t = state.begin("Atlantis");
        let err = state.complete_detail(&t, Ok(vec![])).unwrap_err();
        assert!(matches!(err, CountryError::NotFound(ref n) if n == "Atlantis"));
        assert_eq!(state.status(), LoadStatus::Error(ErrorKind::NotFound));
        assert!(state.focal().is_none());
    }

    #[test]
    fn lookup_failure_suppresses_borders() {
        let mut state = DetailState::new();
        let t = state.begin("France");
        let err = state
            .complete_detail(&t, Err(CountryError::Timeout(Duration::from_secs(10))))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupFailed);
        assert_eq!(state.status(), LoadStatus::Error(ErrorKind::LookupFailed));
        assert_eq!(state.borders(), &BorderStatus::Idle);
    }

    #[test]
    fn island_has_no_border_request() {
        let mut state = DetailState::new();
        let t = state.begin("Iceland");
        let next = state
            .complete_detail(&t, Ok(vec![detail("Iceland", "ISL", &[])]))
            .unwrap();
        assert!(next.is_none());
        assert_eq!(state.borders(), &BorderStatus::None);
        assert!(state.border_countries().is_empty());
    }

    #[test]
    fn border_failure_keeps_focal() {
        let mut state = DetailState::new();
        let t = state.begin("Peru");
        let bt = state
            .complete_detail(&t, Ok(vec![detail("Peru", "PER", &["BOL", "CHL"])]))
            .unwrap()
            .unwrap();
        let _ = state.complete_borders(&bt, Err(CountryError::InvalidData("bad".into())));

        assert_eq!(state.status(), LoadStatus::Loaded);
        assert_eq!(state.focal().unwrap().common_name(), "Peru");
        assert_eq!(state.borders(), &BorderStatus::Failed);
        assert!(state.border_countries().is_empty());
    }

    #[test]
    fn stale_detail_never_replaces_newer_navigation() {
        let mut state = DetailState::new();
        let slow = state.begin("Germany");
        let fast = state.begin("France");

        state
            .complete_detail(&fast, Ok(vec![detail("France", "FRA", &[])]))
            .unwrap();
        let late = state.complete_detail(&slow, Ok(vec![detail("Germany", "DEU", &[])]));

        assert!(matches!(late, Err(CountryError::Superseded)));
        assert_eq!(state.focal().unwrap().common_name(), "France");
        assert_eq!(state.name(), Some("France"));
    }

    #[test]
    fn stale_borders_are_discarded() {
        let mut state = DetailState::new();
        let t = state.begin("Spain");
        let spain_borders = state
            .complete_detail(&t, Ok(vec![detail("Spain", "ESP", &["FRA", "PRT"])]))
            .unwrap()
            .unwrap();

        let t = state.begin("Portugal");
        let portugal_borders = state
            .complete_detail(&t, Ok(vec![detail("Portugal", "PRT", &["ESP"])]))
            .unwrap()
            .unwrap();

        let res = state.complete_borders(
            &spain_borders,
            Ok(vec![detail("France", "FRA", &[]), detail("Portugal", "PRT", &[])]),
        );
        assert!(matches!(res, Err(CountryError::Superseded)));
        assert_eq!(state.borders(), &BorderStatus::Loading);

        state
            .complete_borders(&portugal_borders, Ok(vec![detail("Spain", "ESP", &[])]))
            .unwrap();
        let names: Vec<&str> = state
            .border_countries()
            .iter()
            .map(|c| c.common_name())
            .collect();
        assert_eq!(names, vec!["Spain"]);
    }

    #[test]
    fn dedup_keeps_first_and_drops_self() {
        let out = dedup_borders(
            vec![
                detail("Mexico", "MEX", &[]),
                detail("United States", "USA", &[]),
                detail("Mexico (dup)", "MEX", &[]),
                detail("Guatemala", "GTM", &[]),
            ],
            Some("GTM"),
        );
        let names: Vec<&str> = out.iter().map(|c| c.common_name()).collect();
        assert_eq!(names, vec!["Mexico", "United States"]);
    }
}
