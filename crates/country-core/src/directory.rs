// crates/country-core/src/directory.rs

//! # Directory Service
//!
//! Owns the base country collection, the active [`FilterState`] and the
//! derived visible list.
//!
//! [`DirectoryState`] is the pure store: every network load is split into a
//! `begin_*` call that hands out a [`DirectoryTicket`] and a
//! [`DirectoryState::complete`] call that applies the response only if the
//! ticket is still the latest one. [`Directory`] wires the store to a
//! [`CountrySource`] for callers that simply want to `await` a load.

use crate::common::{with_timeout, LoadStatus, Seq};
use crate::config::ClientConfig;
use crate::error::{CountryError, Result};
use crate::filter::{apply_filter, FilterState};
use crate::model::{CountrySummary, Region};
use crate::traits::CountrySource;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Which subset a load asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadScope {
    All,
    Region(Region),
}

/// A tagged outbound list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryTicket {
    seq: Seq,
    scope: LoadScope,
}

impl DirectoryTicket {
    pub fn scope(&self) -> LoadScope {
        self.scope
    }

    /// Performs the lookup this ticket stands for, bounded by `limit`.
    pub async fn fetch<S>(&self, source: &S, limit: Duration) -> Result<Vec<CountrySummary>>
    where
        S: CountrySource + ?Sized,
    {
        match self.scope {
            LoadScope::All => with_timeout(limit, source.fetch_all()).await,
            LoadScope::Region(region) => with_timeout(limit, source.fetch_by_region(region)).await,
        }
    }
}

/// What the list view should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    /// Nothing requested yet.
    Idle,
    /// First load in flight, nothing to show yet.
    Loading,
    /// The last load failed and nothing from an earlier load is visible.
    Failed,
    /// Data is there but the filter hides all of it.
    NoMatches,
    Countries(Vec<&'a CountrySummary>),
}

#[derive(Debug, Default)]
pub struct DirectoryState {
    countries: Vec<CountrySummary>,
    /// Scope of `countries`; `None` until the first successful load.
    scope: Option<LoadScope>,
    filter: FilterState,
    status: LoadStatus,
    last_error: Option<String>,
    seq: Seq,
    pending: Option<DirectoryTicket>,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countries(&self) -> &[CountrySummary] {
        &self.countries
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Message of the most recent failed load, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn scope(&self) -> Option<LoadScope> {
        self.scope
    }

    /// True when the base collection only holds one region.
    pub fn is_region_scoped(&self) -> bool {
        matches!(self.scope, Some(LoadScope::Region(_)))
    }

    pub fn begin_load_all(&mut self) -> DirectoryTicket {
        self.issue(LoadScope::All)
    }

    /// Requests the countries of `region`.
    ///
    /// On success the response replaces the base collection and `region`
    /// becomes the selected region, so later searches run over the region
    /// subset until a full reload. On failure the filter is left as it was.
    pub fn begin_load_by_region(&mut self, region: Region) -> DirectoryTicket {
        self.issue(LoadScope::Region(region))
    }

    /// Applies a finished request.
    ///
    /// Returns the new base collection, the load error, or
    /// [`CountryError::Superseded`] when a newer request was issued in the
    /// meantime. A failure keeps the previous collection on display.
    pub fn complete(
        &mut self,
        ticket: &DirectoryTicket,
        result: Result<Vec<CountrySummary>>,
    ) -> Result<&[CountrySummary]> {
        if self.pending.as_ref() != Some(ticket) {
            debug!(seq = ticket.seq.0, scope = ?ticket.scope, "discarding stale country list");
            return Err(CountryError::Superseded);
        }
        self.pending = None;

        match result {
            Ok(countries) => {
                debug!(
                    seq = ticket.seq.0,
                    scope = ?ticket.scope,
                    count = countries.len(),
                    "country list applied"
                );
                self.countries = countries;
                self.scope = Some(ticket.scope);
                if let LoadScope::Region(region) = ticket.scope {
                    self.filter.selected_region = Some(region);
                }
                self.status = LoadStatus::Loaded;
                self.last_error = None;
                Ok(&self.countries)
            }
            Err(e) => {
                warn!(seq = ticket.seq.0, scope = ?ticket.scope, error = %e, "country list failed");
                self.status = LoadStatus::Error(e.kind());
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.filter.search_text.clear();
    }

    /// Drops the region filter.
    ///
    /// When the base collection (or the request in flight) is region-scoped
    /// a full reload ticket is returned; the caller must run it; otherwise
    /// the search would keep operating on the region subset.
    pub fn reset_region(&mut self) -> Option<DirectoryTicket> {
        self.filter.selected_region = None;
        let pending_region = matches!(
            self.pending,
            Some(DirectoryTicket {
                scope: LoadScope::Region(_),
                ..
            })
        );
        if self.is_region_scoped() || pending_region {
            Some(self.begin_load_all())
        } else {
            None
        }
    }

    /// Current filter applied to the base collection.
    pub fn visible(&self) -> Vec<&CountrySummary> {
        apply_filter(&self.countries, &self.filter)
    }

    pub fn view(&self) -> ListView<'_> {
        if self.scope.is_none() && self.countries.is_empty() {
            return match self.status {
                LoadStatus::Idle => ListView::Idle,
                LoadStatus::Loading => ListView::Loading,
                LoadStatus::Error(_) => ListView::Failed,
                LoadStatus::Loaded => ListView::NoMatches,
            };
        }
        let visible = self.visible();
        if visible.is_empty() {
            match self.status {
                LoadStatus::Error(_) => ListView::Failed,
                _ => ListView::NoMatches,
            }
        } else {
            ListView::Countries(visible)
        }
    }

    fn issue(&mut self, scope: LoadScope) -> DirectoryTicket {
        let ticket = DirectoryTicket {
            seq: self.seq.bump(),
            scope,
        };
        debug!(seq = ticket.seq.0, scope = ?scope, "country list requested");
        self.pending = Some(ticket);
        self.status = LoadStatus::Loading;
        ticket
    }
}

/// [`DirectoryState`] bound to a source, for sequential callers.
pub struct Directory<S: ?Sized> {
    state: DirectoryState,
    source: Arc<S>,
    config: ClientConfig,
}

impl<S: CountrySource + ?Sized> Directory<S> {
    pub fn new(source: Arc<S>, config: ClientConfig) -> Self {
        Self {
            state: DirectoryState::new(),
            source,
            config,
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DirectoryState {
        &mut self.state
    }

    /// Fetches the full collection and makes it the base collection.
    pub async fn load_all(&mut self) -> Result<&[CountrySummary]> {
        let ticket = self.state.begin_load_all();
        self.run(ticket).await
    }

    /// Selects `region` and replaces the base collection with its countries.
    pub async fn load_by_region(&mut self, region: Region) -> Result<&[CountrySummary]> {
        let ticket = self.state.begin_load_by_region(region);
        self.run(ticket).await
    }

    /// Drops the region filter, reloading everything if the base collection
    /// was region-scoped.
    pub async fn reset_region(&mut self) -> Result<&[CountrySummary]> {
        match self.state.reset_region() {
            Some(ticket) => self.run(ticket).await,
            None => Ok(self.state.countries()),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub fn clear_search(&mut self) {
        self.state.clear_search();
    }

    pub fn visible(&self) -> Vec<&CountrySummary> {
        self.state.visible()
    }

    pub fn view(&self) -> ListView<'_> {
        self.state.view()
    }

    async fn run(&mut self, ticket: DirectoryTicket) -> Result<&[CountrySummary]> {
        let result = ticket
            .fetch(self.source.as_ref(), self.config.request_timeout())
            .await;
        self.state.complete(&ticket, result)
    }
}
