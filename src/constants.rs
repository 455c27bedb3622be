//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Catalog endpoint. `/all` only answers when the wanted fields are listed.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,region,flag,cca3";

/// Log file written next to the working directory unless configured otherwise
pub const DEFAULT_LOG_FILE: &str = "country-challenge.log";

/// Directory under the home directory holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".country-challenge";

/// Header bar text
pub const APP_NAME: &str = "CountryChallenge";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
