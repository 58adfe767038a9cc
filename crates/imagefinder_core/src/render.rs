use serde::Serialize;

use crate::{CrawlPayload, NoResultsError};

/// Display lists and summary for one completed crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    pub normal_images: Vec<String>,
    pub logo_images: Vec<String>,
    pub stats_text: String,
}

impl RenderedResult {
    pub fn total(&self) -> usize {
        self.normal_images.len() + self.logo_images.len()
    }
}

/// Turns a completed payload into display lists. Pure; a missing list counts as
/// empty, but at least one of the two must be present.
pub fn render(payload: &CrawlPayload) -> Result<RenderedResult, NoResultsError> {
    if payload.images.is_none() && payload.logos.is_none() {
        return Err(NoResultsError);
    }

    let normal_images = payload.images.clone().unwrap_or_default();
    let logo_images = payload.logos.clone().unwrap_or_default();
    let stats_text = stats_text(normal_images.len(), logo_images.len());

    Ok(RenderedResult {
        normal_images,
        logo_images,
        stats_text,
    })
}

pub fn stats_text(normal: usize, logos: usize) -> String {
    format!(
        "Total images found: {} (Normal: {}, Logos: {})",
        normal + logos,
        normal,
        logos
    )
}
