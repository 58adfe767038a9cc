use std::time::Duration;

use crate::{Generation, TerminalResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetLoadingVisible(bool),
    DispatchSubmit {
        generation: Generation,
        url: String,
    },
    SchedulePoll {
        generation: Generation,
        url: String,
        delay: Duration,
    },
    /// Abort any suspended work still running for `generation`.
    CancelGeneration { generation: Generation },
    ReportTerminal {
        generation: Generation,
        result: TerminalResult,
    },
}
