use finder_logging::finder_error;
use imagefinder_core::RenderedResult;

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Lines to print for a completed crawl.
pub fn render(result: &RenderedResult, format: OutputFormat) -> Vec<String> {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(text) => vec![text],
            Err(err) => {
                finder_error!("Failed to serialize result: {}", err);
                Vec::new()
            }
        },
    }
}

fn render_text(result: &RenderedResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.total() + 3);
    lines.push(result.stats_text.clone());
    push_section(&mut lines, NORMAL_HEADING, &result.normal_images);
    push_section(&mut lines, LOGO_HEADING, &result.logo_images);
    lines
}

fn push_section(lines: &mut Vec<String>, heading: &str, urls: &[String]) {
    if urls.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.extend(urls.iter().map(|url| format!("{LIST_BULLET}{url}")));
}
