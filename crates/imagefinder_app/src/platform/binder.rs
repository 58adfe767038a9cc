use finder_logging::finder_debug;
use imagefinder_client::UiSink;
use imagefinder_core::{CrawlError, TerminalResult};
use url::Url;

use super::ui::constants::LOADING_LABEL;
use super::ui::render::{render, OutputFormat};

/// Checks user input before it ever reaches the poller.
/// Returns the trimmed URL exactly as typed, which is also the backend's job key.
pub(crate) fn validate_input(raw: &str) -> Result<String, CrawlError> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return Err(CrawlError::InvalidUrl);
    }
    match Url::parse(candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(candidate.to_string()),
        _ => Err(CrawlError::InvalidUrl),
    }
}

/// Terminal stand-in for the page: loading indicator and results on the console.
pub(crate) struct TerminalBinder {
    format: OutputFormat,
}

impl TerminalBinder {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl UiSink for TerminalBinder {
    fn set_loading_visible(&self, visible: bool) {
        finder_debug!("Loading indicator visible={}", visible);
        if visible {
            eprintln!("{LOADING_LABEL}");
        }
    }

    fn on_terminal_result(&self, result: &TerminalResult) {
        match result {
            Ok(rendered) => {
                for line in render(rendered, self.format) {
                    println!("{line}");
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}
