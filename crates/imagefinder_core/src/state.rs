use std::time::Duration;

use crate::view_model::SessionView;

pub type Generation = u64;

pub const DEFAULT_MAX_RETRIES: u32 = 10;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Retry budget and fixed delay between status polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub max_retries: u32,
    pub poll_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Submitting,
    Polling,
    Completed,
    Failed,
    TimedOut,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Completed | Phase::Failed | Phase::TimedOut)
    }
}

/// Bookkeeping for the one live submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub generation: Generation,
    pub url: String,
    pub retry_count: u32,
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlSession {
    config: PollConfig,
    next_generation: Generation,
    active: Option<PollState>,
    last_terminal: Option<(Generation, Phase)>,
    loading_visible: bool,
}

impl CrawlSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> PollConfig {
        self.config
    }

    pub fn active(&self) -> Option<&PollState> {
        self.active.as_ref()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            loading_visible: self.loading_visible,
            generation: self.active.as_ref().map(|poll| poll.generation),
            url: self.active.as_ref().map(|poll| poll.url.clone()),
            phase: self.active.as_ref().map(|poll| poll.phase),
            retry_count: self.active.as_ref().map_or(0, |poll| poll.retry_count),
            last_terminal: self.last_terminal,
        }
    }

    /// Starts a new submission, handing back the displaced one if any.
    pub(crate) fn begin(&mut self, url: String) -> (Generation, Option<PollState>) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let displaced = self.active.replace(PollState {
            generation,
            url,
            retry_count: 0,
            phase: Phase::Submitting,
        });
        self.loading_visible = true;
        (generation, displaced)
    }

    /// Takes the live poll state if `generation` is current and in `phase`.
    /// Answers for anything else are stale and must be dropped.
    pub(crate) fn take_current(&mut self, generation: Generation, phase: Phase) -> Option<PollState> {
        let is_current = self
            .active
            .as_ref()
            .is_some_and(|poll| poll.generation == generation && poll.phase == phase);
        if is_current {
            self.active.take()
        } else {
            None
        }
    }

    pub(crate) fn resume(&mut self, poll: PollState) {
        self.active = Some(poll);
    }

    pub(crate) fn finish(&mut self, generation: Generation, phase: Phase) {
        debug_assert!(phase.is_terminal());
        self.active = None;
        self.last_terminal = Some((generation, phase));
        self.loading_visible = false;
    }

    pub(crate) fn abandon(&mut self) -> Option<PollState> {
        let poll = self.active.take()?;
        self.loading_visible = false;
        Some(poll)
    }
}
