//! The end-to-end run: fetch, status gate, parse, extract, write.

use std::fmt;
use std::path::PathBuf;

use crate::config::ScrapeConfig;
use crate::error::CardsError;
use crate::extract::extract;
use crate::fetch::{Fetcher, Page};
use crate::parse::{find_cards, parse, CardSelectors};
use crate::record::Record;
use crate::writer::write_csv_file;

/// Result of fetching and extracting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Status 200: one record per card, in document order.
    Cards(Vec<Record>),
    /// Any other status. Nothing further happens.
    Rejected { status: u16 },
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { path: PathBuf, rows: usize },
    Rejected { status: u16 },
}

/// The console message for the outcome.
impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { path, .. } => {
                write!(f, "Data successfully written to {}", path.display())
            }
            Self::Rejected { status } => {
                write!(f, "Failed to retrieve the page. Status code: {}", status)
            }
        }
    }
}

/// Only an exact 200 lets the run continue.
pub fn accept(page: &Page) -> bool {
    page.status == 200
}

/// Parse a page body and extract every card on it.
pub fn extract_records(body: &str) -> Result<Vec<Record>, CardsError> {
    let selectors = CardSelectors::new()?;
    let doc = parse(body);
    let cards = find_cards(&doc, &selectors);
    tracing::info!(cards = cards.len(), "found directory cards");

    let records = cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let _span = tracing::warn_span!("card", index).entered();
            extract(card, &selectors)
        })
        .collect();
    Ok(records)
}

/// Fetch `url` and extract its cards, stopping at the status gate.
pub async fn scrape<F>(fetcher: &F, url: &str) -> Result<ScrapeOutcome, CardsError>
where
    F: Fetcher + ?Sized,
{
    let page = fetcher.fetch(url).await?;
    if !accept(&page) {
        tracing::debug!(status = page.status, "page rejected");
        return Ok(ScrapeOutcome::Rejected {
            status: page.status,
        });
    }
    Ok(ScrapeOutcome::Cards(extract_records(&page.body)?))
}

/// Run the whole pipeline. The output file is only created once the page has
/// passed the status gate and every card has been extracted.
pub async fn run<F>(fetcher: &F, config: &ScrapeConfig) -> Result<RunOutcome, CardsError>
where
    F: Fetcher + ?Sized,
{
    match scrape(fetcher, &config.url).await? {
        ScrapeOutcome::Rejected { status } => Ok(RunOutcome::Rejected { status }),
        ScrapeOutcome::Cards(records) => {
            write_csv_file(&config.output, &records)?;
            Ok(RunOutcome::Written {
                path: config.output.clone(),
                rows: records.len(),
            })
        }
    }
}
