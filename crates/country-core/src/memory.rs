// crates/country-core/src/memory.rs

//! In-process [`CountrySource`] over a fixed dataset.
//!
//! Answers the four lookups the same way the REST API does (region equality,
//! name matching, code batches) and records how it was called, so the stores
//! can be exercised without a network.

use crate::error::{CountryError, Result};
use crate::model::{CountryDetail, CountrySummary, Region};
use crate::text::equals_folded;
use crate::traits::{CountrySource, NameMatch};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// The lookup kinds, used for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    All,
    Region,
    Name,
    Codes,
}

#[derive(Default)]
struct Calls {
    all: AtomicUsize,
    region: AtomicUsize,
    name: AtomicUsize,
    codes: AtomicUsize,
}

#[derive(Default)]
pub struct InMemorySource {
    records: Vec<CountryDetail>,
    failing: HashSet<Capability>,
    failing_regions: HashSet<Region>,
    name_delays: HashMap<String, Duration>,
    calls: Calls,
    code_batches: Mutex<Vec<Vec<String>>>,
}

impl InMemorySource {
    pub fn new(records: Vec<CountryDetail>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Every call of `capability` fails with a lookup error.
    pub fn failing(mut self, capability: Capability) -> Self {
        self.failing.insert(capability);
        self
    }

    /// Only region loads for `region` fail.
    pub fn failing_region(mut self, region: Region) -> Self {
        self.failing_regions.insert(region);
        self
    }

    /// Name lookups for `name` complete after `delay`.
    pub fn delay_name(mut self, name: impl Into<String>, delay: Duration) -> Self {
        self.name_delays.insert(name.into(), delay);
        self
    }

    pub fn records(&self) -> &[CountryDetail] {
        &self.records
    }

    pub fn calls(&self, capability: Capability) -> usize {
        let counter = match capability {
            Capability::All => &self.calls.all,
            Capability::Region => &self.calls.region,
            Capability::Name => &self.calls.name,
            Capability::Codes => &self.calls.codes,
        };
        counter.load(Ordering::SeqCst)
    }

    /// Code lists passed to `fetch_by_codes`, in call order.
    pub fn code_batches(&self) -> Vec<Vec<String>> {
        self.code_batches
            .lock()
            .map(|b| b.clone())
            .unwrap_or_default()
    }

    fn check(&self, capability: Capability) -> Result<()> {
        if self.failing.contains(&capability) {
            return Err(CountryError::Status {
                status: 503,
                url: format!("memory://{capability:?}").to_lowercase(),
            });
        }
        Ok(())
    }

    fn summaries<'a>(&'a self, keep: impl Fn(&CountryDetail) -> bool + 'a) -> Vec<CountrySummary> {
        self.records
            .iter()
            .filter(|r| keep(r))
            .map(|r| r.summary.clone())
            .collect()
    }
}

#[async_trait]
impl CountrySource for InMemorySource {
    async fn fetch_all(&self) -> Result<Vec<CountrySummary>> {
        self.calls.all.fetch_add(1, Ordering::SeqCst);
        self.check(Capability::All)?;
        Ok(self.summaries(|_| true))
    }

    async fn fetch_by_region(&self, region: Region) -> Result<Vec<CountrySummary>> {
        self.calls.region.fetch_add(1, Ordering::SeqCst);
        self.check(Capability::Region)?;
        if self.failing_regions.contains(&region) {
            return Err(CountryError::Status {
                status: 503,
                url: format!("memory://region/{region}"),
            });
        }
        Ok(self.summaries(move |r| r.summary.in_region(region)))
    }

    async fn fetch_by_name(&self, name: &str, exact: bool) -> Result<Vec<CountryDetail>> {
        self.calls.name.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.name_delays.get(name) {
            tokio::time::sleep(*delay).await;
        }
        self.check(Capability::Name)?;
        Ok(self
            .records
            .iter()
            .filter(|r| {
                if exact {
                    r.is_named(name) || equals_folded(&r.summary.official_name, name)
                } else {
                    r.name_contains(name)
                }
            })
            .cloned()
            .collect())
    }

    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<CountryDetail>> {
        self.calls.codes.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut batches) = self.code_batches.lock() {
            batches.push(codes.to_vec());
        }
        self.check(Capability::Codes)?;
        Ok(self
            .records
            .iter()
            .filter(|r| codes.iter().any(|c| c.eq_ignore_ascii_case(&r.country_code)))
            .cloned()
            .collect())
    }
}
