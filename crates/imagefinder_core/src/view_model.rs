use crate::{Generation, Phase};

/// Snapshot of the session for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub loading_visible: bool,
    pub generation: Option<Generation>,
    pub url: Option<String>,
    pub phase: Option<Phase>,
    pub retry_count: u32,
    pub last_terminal: Option<(Generation, Phase)>,
}
