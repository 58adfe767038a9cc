use crate::{CrawlPayload, ExchangeError, Generation};

/// Result of one request/response exchange with the backend.
pub type ExchangeOutcome = Result<CrawlPayload, ExchangeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted a validated URL.
    Submit { url: String },
    /// The POST for `generation` came back.
    SubmitAnswered {
        generation: Generation,
        outcome: ExchangeOutcome,
    },
    /// A status GET for `generation` came back.
    PollAnswered {
        generation: Generation,
        outcome: ExchangeOutcome,
    },
    /// User abandoned the live submission.
    Cancel,
    NoOp,
}
