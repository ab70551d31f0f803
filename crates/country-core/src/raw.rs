// crates/country-core/src/raw.rs
use serde::Deserialize;
use std::collections::HashMap;

/// Raw country structure as it comes from the REST API (v3.1).
///
/// NOTE: Mirrors the external payload. Every field the list endpoints may
/// leave out is defaulted, so the same struct decodes both the trimmed
/// `?fields=` responses and full records.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
    #[serde(default)]
    pub population: Option<u64>,
    /// The API sends an array; some territories have none, a few have several.
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub currencies: Option<HashMap<String, CurrencyRaw>>,
    /// { "eng": "English", "fra": "French" }
    #[serde(default)]
    pub languages: Option<HashMap<String, String>>,
    #[serde(default)]
    pub tld: Option<Vec<String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub cca3: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
    #[serde(rename = "nativeName", default)]
    pub native_name: Option<HashMap<String, NativeNameRaw>>,
}

#[derive(Debug, Deserialize)]
pub struct NativeNameRaw {
    #[serde(default)]
    pub official: Option<String>,
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// Fields requested from the list endpoints (`/all`, `/region/..`).
pub const SUMMARY_FIELDS: &str = "name,flags,population,capital,region,subregion,cca3";

/// Decode a JSON array of countries.
pub fn parse_countries(bytes: &[u8]) -> serde_json::Result<CountriesRaw> {
    serde_json::from_slice(bytes)
}
