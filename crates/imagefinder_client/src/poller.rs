use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use finder_logging::{finder_debug, finder_info, finder_warn};
use imagefinder_core::{
    update, CrawlSession, Effect, ExchangeError, ExchangeOutcome, Generation, Msg, PollConfig,
    SessionView, TerminalResult,
};
use tokio_util::sync::CancellationToken;

use crate::{crawl_endpoint, decode_payload, Dispatcher, HttpMethod};

/// What the poller needs from whatever displays its progress.
pub trait UiSink: Send + Sync {
    fn set_loading_visible(&self, visible: bool);
    fn on_terminal_result(&self, result: &TerminalResult);
}

/// Drives submissions through the core state machine, executing its effects.
///
/// Each submission gets a generation and a cancellation token. Submitting again
/// cancels the previous generation, and the state machine drops any answer that
/// still arrives for it, so only the newest submission ever reaches the sink.
pub struct CrawlStatusPoller {
    dispatcher: Arc<dyn Dispatcher>,
    sink: Arc<dyn UiSink>,
    session: Mutex<CrawlSession>,
    tokens: Mutex<HashMap<Generation, CancellationToken>>,
}

impl CrawlStatusPoller {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, sink: Arc<dyn UiSink>, config: PollConfig) -> Self {
        Self {
            dispatcher,
            sink,
            session: Mutex::new(CrawlSession::with_config(config)),
            tokens: Mutex::new(HashMap::new()),
        }
    }

    pub fn view(&self) -> SessionView {
        self.lock_session().view()
    }

    /// Runs one submission to its end.
    ///
    /// Returns the terminal result that was reported to the sink, or `None` when
    /// the submission was cancelled or superseded first.
    pub async fn submit(&self, url: impl Into<String>) -> Option<TerminalResult> {
        let url = url.into();
        finder_info!("Submitting crawl for {}", url);

        let mut pending: VecDeque<Effect> = self.apply(Msg::Submit { url }).into();
        let mut terminal = None;

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::DispatchSubmit { generation, url } => {
                    let token = self.token(generation);
                    let Some(outcome) = self.exchange(&token, &url, HttpMethod::Post).await else {
                        finder_debug!("Generation {} cancelled during submit", generation);
                        break;
                    };
                    pending.extend(self.apply(Msg::SubmitAnswered { generation, outcome }));
                }
                Effect::SchedulePoll {
                    generation,
                    url,
                    delay,
                } => {
                    let token = self.token(generation);
                    let cancelled = tokio::select! {
                        _ = token.cancelled() => true,
                        _ = tokio::time::sleep(delay) => false,
                    };
                    if cancelled {
                        finder_debug!("Generation {} cancelled while waiting to poll", generation);
                        break;
                    }
                    let Some(outcome) = self.exchange(&token, &url, HttpMethod::Get).await else {
                        finder_debug!("Generation {} cancelled during poll", generation);
                        break;
                    };
                    pending.extend(self.apply(Msg::PollAnswered { generation, outcome }));
                }
                Effect::ReportTerminal { generation, result } => {
                    self.forget(generation);
                    match &result {
                        Ok(rendered) => finder_info!(
                            "Generation {} completed: {}",
                            generation,
                            rendered.stats_text
                        ),
                        Err(err) => finder_warn!("Generation {} ended: {}", generation, err),
                    }
                    self.sink.on_terminal_result(&result);
                    terminal = Some(result);
                }
                other => self.run_immediate(other),
            }
        }

        terminal
    }

    /// Abandons the live submission, if any. Nothing is reported for it.
    pub fn cancel(&self) {
        for effect in self.apply(Msg::Cancel) {
            self.run_immediate(effect);
        }
    }

    fn run_immediate(&self, effect: Effect) {
        match effect {
            Effect::SetLoadingVisible(visible) => self.sink.set_loading_visible(visible),
            Effect::CancelGeneration { generation } => {
                finder_info!("Cancelling generation {}", generation);
                if let Some(token) = self.lock_tokens().remove(&generation) {
                    token.cancel();
                }
            }
            other => finder_warn!("Effect {:?} needs a running submission", other),
        }
    }

    async fn exchange(
        &self,
        token: &CancellationToken,
        url: &str,
        method: HttpMethod,
    ) -> Option<ExchangeOutcome> {
        let endpoint = crawl_endpoint(url);
        let answer = tokio::select! {
            _ = token.cancelled() => None,
            answer = self.dispatcher.call(&endpoint, method, None) => Some(answer),
        }?;
        Some(
            answer
                .map_err(ExchangeError::from)
                .and_then(|body| decode_payload(body).map_err(ExchangeError::from)),
        )
    }

    fn apply(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.lock_session();
        let session = std::mem::take(&mut *guard);
        let (session, effects) = update(session, msg);
        *guard = session;

        // Register tokens while the session is still locked, so a competing
        // submission can never cancel a generation before its token exists.
        for effect in &effects {
            if let Effect::DispatchSubmit { generation, .. } = effect {
                self.lock_tokens().insert(*generation, CancellationToken::new());
            }
        }
        effects
    }

    /// A generation without a registered token was cancelled or has finished.
    fn token(&self, generation: Generation) -> CancellationToken {
        if let Some(token) = self.lock_tokens().get(&generation) {
            return token.clone();
        }
        let token = CancellationToken::new();
        token.cancel();
        token
    }

    fn forget(&self, generation: Generation) {
        self.lock_tokens().remove(&generation);
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, CrawlSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tokens(&self) -> std::sync::MutexGuard<'_, HashMap<Generation, CancellationToken>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
