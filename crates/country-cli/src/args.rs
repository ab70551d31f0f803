use clap::{Parser, Subcommand};
use country_core::Region;

/// CLI arguments for country-cli
#[derive(Debug, Parser)]
#[command(
    name = "country-cli",
    version,
    about = "Browse countries from the REST Countries API"
)]
pub struct CliArgs {
    /// API root (default: https://restcountries.com/v3.1)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", global = true, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Match `show NAME` as a substring instead of the full name
    #[arg(long = "partial-names", global = true)]
    pub partial_names: bool,

    /// Print display fields as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries, optionally narrowed by search text and region
    List {
        /// Case- and accent-insensitive substring of the common name
        #[arg(short, long)]
        search: Option<String>,

        /// One of Africa, Americas, Antarctic, Asia, Europe, Oceania
        #[arg(short, long)]
        region: Option<Region>,
    },

    /// Show one country with its bordering countries
    Show {
        /// Country name (e.g. "Canada")
        name: String,
    },

    /// List the selectable regions
    Regions,
}
