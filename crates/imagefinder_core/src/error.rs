use std::fmt;

use thiserror::Error;

/// Non-200 answer from the backend, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub status_code: u16,
    pub status_text: String,
    pub raw_body: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.status_code, self.status_text, self.raw_body)
    }
}

/// Why a single request/response exchange produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    Http(HttpError),
    Parse(String),
    Network(String),
}

/// Returned by the renderer when a completed payload carries no image lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No images found.")]
pub struct NoResultsError;

/// Every failure a submission can end with. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrawlError {
    #[error("Please enter a valid URL.")]
    InvalidUrl,
    #[error("Error: {0}")]
    Transport(HttpError),
    #[error("Error: {0}")]
    Network(String),
    #[error("Error: malformed response: {0}")]
    Parse(String),
    #[error("Crawling failed: {0}")]
    Crawl(String),
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(String),
    #[error("Crawling is taking longer than expected. Please check again later.")]
    TimedOut,
    #[error("No images found.")]
    NoResults,
}

impl From<ExchangeError> for CrawlError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Http(http) => CrawlError::Transport(http),
            ExchangeError::Parse(detail) => CrawlError::Parse(detail),
            ExchangeError::Network(detail) => CrawlError::Network(detail),
        }
    }
}

impl From<NoResultsError> for CrawlError {
    fn from(_: NoResultsError) -> Self {
        CrawlError::NoResults
    }
}
