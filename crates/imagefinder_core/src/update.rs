use crate::{
    render, CrawlError, CrawlSession, CrawlStatus, Effect, ExchangeOutcome, Msg, Phase, PollConfig,
    PollState, TerminalResult,
};

/// Pure update function: applies a message to the session and returns any effects.
pub fn update(mut session: CrawlSession, msg: Msg) -> (CrawlSession, Vec<Effect>) {
    let effects = match msg {
        Msg::Submit { url } => {
            let (generation, displaced) = session.begin(url.clone());
            let mut effects = Vec::with_capacity(3);
            if let Some(stale) = displaced {
                effects.push(Effect::CancelGeneration {
                    generation: stale.generation,
                });
            }
            effects.push(Effect::SetLoadingVisible(true));
            effects.push(Effect::DispatchSubmit { generation, url });
            effects
        }
        Msg::SubmitAnswered { generation, outcome } => {
            match session.take_current(generation, Phase::Submitting) {
                Some(poll) => advance(&mut session, poll, outcome),
                None => Vec::new(),
            }
        }
        Msg::PollAnswered { generation, outcome } => {
            match session.take_current(generation, Phase::Polling) {
                Some(poll) => advance(&mut session, poll, outcome),
                None => Vec::new(),
            }
        }
        Msg::Cancel => match session.abandon() {
            Some(poll) => vec![
                Effect::CancelGeneration {
                    generation: poll.generation,
                },
                Effect::SetLoadingVisible(false),
            ],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (session, effects)
}

enum Step {
    Continue(PollState),
    Finish(Phase, TerminalResult),
}

fn advance(session: &mut CrawlSession, poll: PollState, outcome: ExchangeOutcome) -> Vec<Effect> {
    let generation = poll.generation;
    match transition(poll, outcome, session.config()) {
        Step::Continue(poll) => {
            let effect = Effect::SchedulePoll {
                generation,
                url: poll.url.clone(),
                delay: session.config().poll_interval,
            };
            session.resume(poll);
            vec![effect]
        }
        Step::Finish(phase, result) => {
            session.finish(generation, phase);
            vec![
                Effect::SetLoadingVisible(false),
                Effect::ReportTerminal { generation, result },
            ]
        }
    }
}

fn transition(mut poll: PollState, outcome: ExchangeOutcome, config: PollConfig) -> Step {
    let payload = match outcome {
        Ok(payload) => payload,
        Err(err) => return Step::Finish(Phase::Failed, Err(err.into())),
    };

    match payload.status {
        CrawlStatus::Completed => {
            Step::Finish(Phase::Completed, render(&payload).map_err(CrawlError::from))
        }
        CrawlStatus::Error => Step::Finish(
            Phase::Failed,
            Err(CrawlError::Crawl(payload.message.unwrap_or_default())),
        ),
        CrawlStatus::InProgress => match poll.phase {
            Phase::Submitting => {
                poll.phase = Phase::Polling;
                Step::Continue(poll)
            }
            _ if poll.retry_count < config.max_retries => {
                poll.retry_count += 1;
                Step::Continue(poll)
            }
            _ => Step::Finish(Phase::TimedOut, Err(CrawlError::TimedOut)),
        },
        CrawlStatus::Unexpected(raw) => {
            Step::Finish(Phase::Failed, Err(CrawlError::UnexpectedStatus(raw)))
        }
    }
}
