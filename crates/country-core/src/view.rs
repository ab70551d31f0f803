// crates/country-core/src/view.rs

//! Display-ready views of the model.
//!
//! Each absent optional attribute is left out entirely, so renderers never
//! print `None`, `0` or an empty label.

use crate::model::{CountryDetail, CountrySummary};
use serde::Serialize;

/// One labelled line of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Serializable list entry.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView<'a> {
    pub name: &'a str,
    pub flag: Option<&'a str>,
    pub fields: Vec<Field>,
}

/// Serializable detail page.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub flag: Option<&'a str>,
    pub fields: Vec<Field>,
    /// Neighbour names; each one is a navigation target.
    pub borders: Vec<&'a str>,
}

impl<'a> SummaryView<'a> {
    pub fn new(country: &'a CountrySummary) -> Self {
        Self {
            name: country.common_name(),
            flag: country.flag_image_url(),
            fields: country.display_fields(),
        }
    }
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a CountryDetail, borders: &'a [CountrySummary]) -> Self {
        Self {
            name: detail.common_name(),
            code: detail.country_code(),
            flag: detail.summary.flag_image_url(),
            fields: detail.display_fields(),
            borders: borders.iter().map(|b| b.common_name()).collect(),
        }
    }
}

impl CountrySummary {
    /// Population and capital, as on the list cards.
    pub fn display_fields(&self) -> Vec<Field> {
        let mut out = Vec::new();
        if let Some(p) = self.population {
            out.push(Field::new("Population", group_thousands(p)));
        }
        if let Some(c) = self.capital() {
            out.push(Field::new("Capital", c));
        }
        out
    }
}

impl CountryDetail {
    pub fn display_fields(&self) -> Vec<Field> {
        let s = &self.summary;
        let mut out = Vec::new();

        let native = join(self.native_names.values().map(|n| n.official.as_str()));
        if let Some(n) = native {
            out.push(Field::new("Native Name", n));
        }
        if let Some(p) = s.population {
            out.push(Field::new("Population", group_thousands(p)));
        }
        if let Some(r) = s.region() {
            out.push(Field::new("Region", r));
        }
        if let Some(r) = s.subregion() {
            out.push(Field::new("Subregion", r));
        }
        if let Some(c) = s.capital() {
            out.push(Field::new("Capital", c));
        }
        if let Some(t) = join(self.top_level_domains.iter().map(String::as_str)) {
            out.push(Field::new("Top Level Domain", t));
        }
        if let Some(c) = join(self.currencies.values().map(|c| c.name.as_str())) {
            out.push(Field::new("Currencies", c));
        }
        if let Some(l) = join(self.languages.iter().map(|l| l.name.as_str())) {
            out.push(Field::new("Languages", l));
        }
        out
    }
}

/// `38005238` -> `"38,005,238"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Joins with ", " after dropping duplicates; None when nothing is left.
fn join<'a>(items: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !item.is_empty() && !seen.contains(&item) {
            seen.push(item);
        }
    }
    if seen.is_empty() {
        None
    } else {
        Some(seen.join(", "))
    }
}
