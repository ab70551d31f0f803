// crates/country-core/src/model.rs
use crate::error::CountryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Continent-level classifier used as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    /// The name as the remote API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    /// Whether a record's free-text region names this region.
    pub fn matches(&self, region: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(region.trim())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.matches(s))
            .ok_or_else(|| CountryError::UnknownRegion(s.to_string()))
    }
}

/// Identity and headline attributes of one country.
///
/// Every optional attribute stays `None` when the source omits it; display
/// code must check presence instead of printing placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub common_name: String,
    pub official_name: String,
    pub flag_image_url: Option<String>,
    pub population: Option<u64>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
}

impl CountrySummary {
    /// Minimal summary with only the names set.
    pub fn named(common_name: impl Into<String>, official_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            official_name: official_name.into(),
            flag_image_url: None,
            population: None,
            capital: None,
            region: None,
            subregion: None,
        }
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    pub fn flag_image_url(&self) -> Option<&str> {
        self.flag_image_url.as_deref()
    }

    /// True when the record's region is `region`.
    pub fn in_region(&self, region: Region) -> bool {
        self.region().is_some_and(|r| region.matches(r))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Full record for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub summary: CountrySummary,
    /// Language code -> native spelling.
    pub native_names: BTreeMap<String, NativeName>,
    /// Currency code -> currency.
    pub currencies: BTreeMap<String, Currency>,
    /// Sorted by language code.
    pub languages: Vec<Language>,
    pub top_level_domains: Vec<String>,
    /// 3-letter codes of land neighbours. Empty means no land borders.
    pub border_codes: Vec<String>,
    /// Stable 3-letter code (cca3).
    pub country_code: String,
}

impl CountryDetail {
    pub fn common_name(&self) -> &str {
        self.summary.common_name()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn border_codes(&self) -> &[String] {
        &self.border_codes
    }

    pub fn has_borders(&self) -> bool {
        !self.border_codes.is_empty()
    }

    pub fn summary(&self) -> &CountrySummary {
        &self.summary
    }

    pub fn into_summary(self) -> CountrySummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("americas".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!(" ASIA ".parse::<Region>().unwrap(), Region::Asia);
        assert!(matches!(
            "Atlantis".parse::<Region>(),
            Err(CountryError::UnknownRegion(_))
        ));
    }

    #[test]
    fn summary_region_membership() {
        let mut peru = CountrySummary::named("Peru", "Republic of Peru");
        assert!(!peru.in_region(Region::Americas));
        peru.region = Some("Americas".into());
        assert!(peru.in_region(Region::Americas));
        assert!(!peru.in_region(Region::Europe));
    }
}
