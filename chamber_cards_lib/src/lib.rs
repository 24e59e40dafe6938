//! Library layer for chamber cards: fetch a chamber of commerce directory page,
//! extract its business cards, and write them out as CSV rows.
//!
//! The pipeline is strictly sequential: fetch, status gate, parse, extract, write.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod pipeline;
pub mod record;
pub mod writer;

pub use config::ScrapeConfig;
pub use error::CardsError;
pub use fetch::{DirectoryClient, Fetcher, Page};
pub use pipeline::{accept, run, scrape, RunOutcome, ScrapeOutcome};
pub use record::Record;
