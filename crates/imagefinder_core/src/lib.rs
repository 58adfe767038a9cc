//! ImageFinder core: pure crawl/poll state machine and result rendering.
mod effect;
mod error;
mod msg;
mod payload;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{CrawlError, ExchangeError, HttpError, NoResultsError};
pub use msg::{ExchangeOutcome, Msg};
pub use payload::{CrawlPayload, CrawlStatus};
pub use render::{render, stats_text, RenderedResult};
pub use state::{
    CrawlSession, Generation, Phase, PollConfig, PollState, DEFAULT_MAX_RETRIES,
    DEFAULT_POLL_INTERVAL,
};
pub use update::update;
pub use view_model::SessionView;

/// Outcome handed to the UI once a submission reaches a terminal phase.
pub type TerminalResult = Result<RenderedResult, CrawlError>;
