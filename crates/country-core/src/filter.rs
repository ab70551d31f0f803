// crates/country-core/src/filter.rs
use crate::model::{CountrySummary, Region};
use crate::traits::NameMatch;

/// What the user typed and which region they picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub selected_region: Option<Region>,
}

impl FilterState {
    pub fn new(search_text: impl Into<String>, selected_region: Option<Region>) -> Self {
        Self {
            search_text: search_text.into(),
            selected_region,
        }
    }

    /// True when neither predicate restricts anything.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.selected_region.is_none()
    }

    pub fn matches(&self, country: &CountrySummary) -> bool {
        let text_ok = country.name_contains(&self.search_text);
        let region_ok = self
            .selected_region
            .map_or(true, |region| country.in_region(region));
        text_ok && region_ok
    }
}

/// Stable filter over `base`: keeps input order, never re-sorts.
///
/// Pure and allocation-light, so it can run on every keystroke.
pub fn apply_filter<'a>(base: &'a [CountrySummary], filter: &FilterState) -> Vec<&'a CountrySummary> {
    if filter.is_empty() {
        return base.iter().collect();
    }
    base.iter().filter(|c| filter.matches(c)).collect()
}
