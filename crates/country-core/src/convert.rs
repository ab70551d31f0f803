// crates/country-core/src/convert.rs
use crate::error::{CountryError, Result};
use crate::model::{CountryDetail, CountrySummary, Currency, Language, NativeName};
use crate::raw::{CountriesRaw, CountryRaw, CurrencyRaw, NativeNameRaw};
use crate::text::non_blank;
use std::collections::{BTreeMap, HashMap};

/// **Summary Converter:** Raw -> CountrySummary.
///
/// Never fails: only the common name is required and serde already
/// enforced it.
pub fn to_summary(raw: CountryRaw) -> CountrySummary {
    summary_parts(raw).0
}

/// **Detail Converter:** Raw -> CountryDetail.
///
/// A record without `cca3` cannot take part in the border join and is
/// rejected rather than patched up.
pub fn to_detail(raw: CountryRaw) -> Result<CountryDetail> {
    let (summary, rest) = summary_parts(raw);
    let country_code = non_blank(rest.cca3).ok_or_else(|| {
        CountryError::InvalidData(format!("'{}' has no country code", summary.common_name))
    })?;

    let native_names = rest
        .native_names
        .into_iter()
        .filter_map(|(lang, n)| {
            let official = non_blank(n.official);
            let common = non_blank(n.common);
            if official.is_none() && common.is_none() {
                return None;
            }
            let official = official.or_else(|| common.clone()).unwrap_or_default();
            let common = common.unwrap_or_else(|| official.clone());
            Some((lang, NativeName { official, common }))
        })
        .collect::<BTreeMap<_, _>>();

    let currencies = rest
        .currencies
        .into_iter()
        .filter_map(|(code, c)| {
            non_blank(c.name).map(|name| {
                (
                    code,
                    Currency {
                        name,
                        symbol: non_blank(c.symbol),
                    },
                )
            })
        })
        .collect::<BTreeMap<_, _>>();

    let mut languages: Vec<Language> = rest
        .languages
        .into_iter()
        .filter_map(|(code, name)| non_blank(Some(name)).map(|name| Language { code, name }))
        .collect();
    languages.sort_by(|a, b| a.code.cmp(&b.code));

    let top_level_domains = rest
        .tld
        .into_iter()
        .filter_map(|t| non_blank(Some(t)))
        .collect();

    let border_codes = rest
        .borders
        .into_iter()
        .filter_map(|b| non_blank(Some(b)))
        .map(|b| b.to_ascii_uppercase())
        .collect();

    Ok(CountryDetail {
        summary,
        native_names,
        currencies,
        languages,
        top_level_domains,
        border_codes,
        country_code: country_code.to_ascii_uppercase(),
    })
}

pub fn to_summaries(raw: CountriesRaw) -> Vec<CountrySummary> {
    raw.into_iter().map(to_summary).collect()
}

/// Converts a whole batch; one malformed record fails the batch.
pub fn to_details(raw: CountriesRaw) -> Result<Vec<CountryDetail>> {
    raw.into_iter().map(to_detail).collect()
}

// -----------------------------------------------------------------------------
// INTERNAL
// -----------------------------------------------------------------------------

struct DetailRest {
    native_names: HashMap<String, NativeNameRaw>,
    currencies: HashMap<String, CurrencyRaw>,
    languages: HashMap<String, String>,
    tld: Vec<String>,
    borders: Vec<String>,
    cca3: Option<String>,
}

fn summary_parts(raw: CountryRaw) -> (CountrySummary, DetailRest) {
    let common_name = raw.name.common.trim().to_string();
    let official_name = non_blank(raw.name.official).unwrap_or_else(|| common_name.clone());

    // svg first, png as fallback
    let flag_image_url = raw
        .flags
        .and_then(|f| non_blank(f.svg).or_else(|| non_blank(f.png)));

    let capital = raw
        .capital
        .and_then(|caps| caps.into_iter().find_map(|c| non_blank(Some(c))));

    let summary = CountrySummary {
        common_name,
        official_name,
        flag_image_url,
        population: raw.population,
        capital,
        region: non_blank(raw.region),
        subregion: non_blank(raw.subregion),
    };

    let rest = DetailRest {
        native_names: raw.name.native_name.unwrap_or_default(),
        currencies: raw.currencies.unwrap_or_default(),
        languages: raw.languages.unwrap_or_default(),
        tld: raw.tld.unwrap_or_default(),
        borders: raw.borders.unwrap_or_default(),
        cca3: raw.cca3,
    };

    (summary, rest)
}
