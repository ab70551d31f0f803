//! country-cli
//! ===========
//!
//! Command-line front end for [`country-core`].
//!
//! The binary is the deliverable; this library target only carries the
//! overview page.
//!
//! ```text
//! country-cli list --region europe --search land
//! country-cli show "United States"
//! country-cli --json show Peru
//! country-cli regions
//! ```
//!
//! Set `RUST_LOG=country_core=debug` to see each request and every discarded
//! stale response on stderr.
//!
//! [`country-core`]: https://docs.rs/country-core
