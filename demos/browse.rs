//! Browsing example for country-explorer
//!
//! Walks the list and detail flow against an in-memory dataset, then (with
//! `--live`) repeats the first step against the public API.
//!
//! ```text
//! cargo run --example browse
//! cargo run --example browse -- --live
//! ```

use country_core::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn record(name: &str, code: &str, region: &str, population: u64, borders: &[&str]) -> CountryDetail {
    let mut summary = CountrySummary::named(name, name);
    summary.region = Some(region.to_string());
    summary.population = Some(population);
    CountryDetail {
        summary,
        native_names: Default::default(),
        currencies: Default::default(),
        languages: Vec::new(),
        top_level_domains: Vec::new(),
        border_codes: borders.iter().map(|b| b.to_string()).collect(),
        country_code: code.to_string(),
    }
}

fn dataset() -> Vec<CountryDetail> {
    vec![
        record("Belgium", "BEL", "Europe", 11_555_997, &["FRA", "DEU", "LUX", "NLD"]),
        record("France", "FRA", "Europe", 67_391_582, &["BEL", "DEU", "LUX"]),
        record("Germany", "DEU", "Europe", 83_240_525, &["BEL", "FRA", "LUX", "NLD"]),
        record("Luxembourg", "LUX", "Europe", 632_275, &["BEL", "FRA", "DEU"]),
        record("Netherlands", "NLD", "Europe", 16_655_799, &["BEL", "DEU"]),
        record("Réunion", "REU", "Africa", 840_974, &[]),
    ]
}

fn print_list<S: CountrySource + ?Sized>(directory: &Directory<S>) {
    match directory.view() {
        ListView::Countries(list) => {
            for c in list {
                let fields: Vec<String> = c
                    .display_fields()
                    .into_iter()
                    .map(|f| format!("{}: {}", f.label, f.value))
                    .collect();
                println!("  {} [{}]", c.common_name(), fields.join(", "));
            }
        }
        ListView::NoMatches => println!("  No countries match"),
        other => println!("  {other:?}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== country-explorer browse example ===\n");
    let config = ClientConfig::default();
    let source = Arc::new(InMemorySource::new(dataset()));

    println!("--- All countries ---");
    let mut directory = Directory::new(source.clone(), config.clone());
    directory.load_all().await?;
    print_list(&directory);

    println!("\n--- Search \"reunion\" (accent-insensitive) ---");
    directory.set_search_text("reunion");
    print_list(&directory);

    println!("\n--- Europe, search \"land\" ---");
    directory.load_by_region(Region::Europe).await?;
    directory.set_search_text("land");
    print_list(&directory);

    println!("\n--- Detail: Luxembourg ---");
    let mut resolver = DetailResolver::new(source.clone(), config.clone());
    resolver.load_detail("luxembourg").await?;
    if let Some(focal) = resolver.state().focal() {
        let view = DetailView::new(focal, resolver.state().border_countries());
        println!("  {} ({})", view.name, view.code);
        println!("  Borders: {}", view.borders.join(", "));
    }
    println!("  Batched border lookups: {}", source.calls(Capability::Codes));

    println!("\n--- Detail: Atlantis ---");
    match resolver.load_detail("Atlantis").await {
        Ok(c) => println!("  Unexpected match: {}", c.common_name()),
        Err(e) => println!("  {e} ({:?})", e.kind()),
    }

    if std::env::args().any(|a| a == "--live") {
        println!("\n--- Live: Oceania ---");
        let client = Arc::new(RestCountriesClient::new(config.clone())?);
        let mut live = Directory::new(client, config);
        match live.load_by_region(Region::Oceania).await {
            Ok(list) => println!("  {} countries", list.len()),
            Err(e) => println!("  Could not load country data: {e}"),
        }
    }

    Ok(())
}
