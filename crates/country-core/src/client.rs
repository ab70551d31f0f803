// crates/country-core/src/client.rs
#![cfg(feature = "http")]

//! # REST Client
//!
//! [`CountrySource`] over the public REST Countries API (v3.1).
//!
//! Transport, status and decode problems all surface as `Err`. The name and
//! code endpoints answer "no match" with HTTP 404, which is mapped to an
//! empty list rather than an error.

use crate::config::ClientConfig;
use crate::convert;
use crate::error::{CountryError, Result};
use crate::model::{CountryDetail, CountrySummary, Region};
use crate::raw::{parse_countries, CountriesRaw, SUMMARY_FIELDS};
use crate::traits::CountrySource;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestCountriesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn all_url(&self) -> Result<Url> {
        let mut url = self.endpoint(&["all"])?;
        url.query_pairs_mut().append_pair("fields", SUMMARY_FIELDS);
        Ok(url)
    }

    pub fn region_url(&self, region: Region) -> Result<Url> {
        let mut url = self.endpoint(&["region", &region.as_str().to_ascii_lowercase()])?;
        url.query_pairs_mut().append_pair("fields", SUMMARY_FIELDS);
        Ok(url)
    }

    pub fn name_url(&self, name: &str, exact: bool) -> Result<Url> {
        let mut url = self.endpoint(&["name", name])?;
        if exact {
            url.query_pairs_mut().append_pair("fullText", "true");
        }
        Ok(url)
    }

    /// All codes go into a single `codes=` parameter.
    pub fn codes_url(&self, codes: &[String]) -> Result<Url> {
        let mut url = self.endpoint(&["alpha"])?;
        url.query_pairs_mut().append_pair("codes", &codes.join(","));
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url())
            .map_err(|e| CountryError::Config(format!("invalid base_url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| CountryError::Config("base_url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a country array.
    ///
    /// With `missing_is_empty`, a 404 is an empty result.
    async fn get_countries(&self, url: Url, missing_is_empty: bool) -> Result<CountriesRaw> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if missing_is_empty && status == StatusCode::NOT_FOUND {
            debug!(%url, "no matches");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(CountryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(parse_countries(&bytes)?)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<CountrySummary>> {
        let raw = self.get_countries(self.all_url()?, false).await?;
        Ok(convert::to_summaries(raw))
    }

    async fn fetch_by_region(&self, region: Region) -> Result<Vec<CountrySummary>> {
        let raw = self.get_countries(self.region_url(region)?, false).await?;
        Ok(convert::to_summaries(raw))
    }

    async fn fetch_by_name(&self, name: &str, exact: bool) -> Result<Vec<CountryDetail>> {
        if name.trim().is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.get_countries(self.name_url(name, exact)?, true).await?;
        convert::to_details(raw)
    }

    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<CountryDetail>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.get_countries(self.codes_url(codes)?, true).await?;
        convert::to_details(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base: &str) -> RestCountriesClient {
        RestCountriesClient::new(ClientConfig::new(base, Duration::from_secs(5)).unwrap()).unwrap()
    }

    #[test]
    fn list_urls_request_summary_fields() {
        let c = client("https://restcountries.com/v3.1");
        let all = c.all_url().unwrap();
        assert_eq!(all.path(), "/v3.1/all");
        assert!(all.query().unwrap().starts_with("fields=name%2Cflags"));

        let asia = c.region_url(Region::Asia).unwrap();
        assert_eq!(asia.path(), "/v3.1/region/asia");
    }

    #[test]
    fn name_url_escapes_and_flags_exact() {
        let c = client("https://restcountries.com/v3.1/");
        let url = c.name_url("Côte d'Ivoire", true).unwrap();
        assert_eq!(url.path(), "/v3.1/name/C%C3%B4te%20d'Ivoire");
        assert_eq!(url.query(), Some("fullText=true"));

        let partial = c.name_url("united", false).unwrap();
        assert_eq!(partial.query(), None);
    }

    #[test]
    fn codes_are_batched_into_one_url() {
        let c = client("http://localhost:9000");
        let url = c
            .codes_url(&["USA".to_string(), "MEX".to_string()])
            .unwrap();
        assert_eq!(url.path(), "/alpha");
        assert_eq!(url.query(), Some("codes=USA%2CMEX"));
    }
}
