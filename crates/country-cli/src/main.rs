//! country-cli: browse the REST Countries API from a terminal.
//!
//! - List every country, or one region, narrowed by a search string
//!   $ country-cli list --search united
//!   $ country-cli list --region oceania
//!
//! - Show one country with its neighbours
//!   $ country-cli show Germany
//!
//! Pass `--json` to any command to get the display fields as JSON.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use country_core::config::DEFAULT_BASE_URL;
use country_core::prelude::*;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOAD_FAILED: &str = "Could not load country data";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = args
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let config = ClientConfig::new(base_url, Duration::from_secs(args.timeout_secs))?
        .with_exact_name_match(!args.partial_names);
    let client = Arc::new(RestCountriesClient::new(config.clone())?);
    debug!(base_url = config.base_url(), "client ready");

    match args.command {
        Commands::Regions => {
            if args.json {
                let names: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for region in Region::ALL {
                    println!("{region}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::List { search, region } => {
            let mut directory = Directory::new(client, config);
            let loaded = match region {
                Some(r) => directory.load_by_region(r).await.map(|_| ()),
                None => directory.load_all().await.map(|_| ()),
            };
            if let Err(e) = loaded {
                debug!(error = %e, "list load failed");
                eprintln!("{LOAD_FAILED}");
                return Ok(ExitCode::FAILURE);
            }
            if let Some(text) = search {
                directory.set_search_text(text);
            }

            match directory.view() {
                ListView::Countries(countries) => {
                    if args.json {
                        let views: Vec<SummaryView> =
                            countries.into_iter().map(SummaryView::new).collect();
                        println!("{}", serde_json::to_string_pretty(&views)?);
                    } else {
                        for c in countries {
                            print_card(c.common_name(), &c.display_fields());
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                ListView::NoMatches => {
                    println!("No countries match");
                    Ok(ExitCode::SUCCESS)
                }
                ListView::Failed | ListView::Idle | ListView::Loading => {
                    eprintln!("{LOAD_FAILED}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Show { name } => {
            let mut resolver = DetailResolver::new(client, config);
            if let Err(e) = resolver.load_detail(&name).await {
                if e.kind() == ErrorKind::NotFound {
                    eprintln!("No country found for: {name}");
                } else {
                    debug!(error = %e, "detail load failed");
                    eprintln!("{LOAD_FAILED}");
                }
                return Ok(ExitCode::FAILURE);
            }

            let state = resolver.state();
            let Some(detail) = state.focal() else {
                eprintln!("{LOAD_FAILED}");
                return Ok(ExitCode::FAILURE);
            };
            let view = DetailView::new(detail, state.border_countries());

            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(ExitCode::SUCCESS);
            }

            print_card(&format!("{} ({})", view.name, view.code), &view.fields);
            if let Some(flag) = view.flag {
                println!("  Flag: {flag}");
            }
            match state.borders() {
                BorderStatus::None => println!("  No bordering countries"),
                BorderStatus::Failed => println!("  Bordering countries unavailable"),
                _ if view.borders.is_empty() => {}
                _ => println!("  Border Countries: {}", view.borders.join(", ")),
            }
            if state.match_count() > 1 {
                println!(
                    "  ({} countries matched \"{name}\"; showing the first)",
                    state.match_count()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_card(title: &str, fields: &[Field]) {
    println!("{title}");
    for f in fields {
        println!("  {}: {}", f.label, f.value);
    }
}
