//! Error types for the library layer.

/// Errors that abort a run. A non-200 status is not one of them; see
/// [`crate::pipeline::ScrapeOutcome::Rejected`].
#[derive(thiserror::Error, Debug)]
pub enum CardsError {
    /// The request could not be completed (DNS, connection, timeout, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A built-in CSS selector failed to compile.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}
