//! Fixed run parameters and their defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Directory listing scraped when no URL is supplied.
pub const DIRECTORY_URL: &str =
    "https://business.medfordchamber.com/directory/FindStartsWith?term=%23%21";

/// Output file, relative to the current working directory.
pub const OUTPUT_FILE: &str = "cards_info.csv";

/// Request timeout (seconds).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Log filter applied on top of `RUST_LOG`.
pub const DEFAULT_LOG_DIRECTIVE: &str = "chamber_cards_lib=warn";

/// Parameters for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DIRECTORY_URL.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
