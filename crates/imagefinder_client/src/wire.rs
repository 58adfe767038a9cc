//! Wire format of the `/main` endpoint.
//!
//! `images` and `logos` travel as strings whose content is itself a JSON array.
//! They are decoded here, once, so nothing past this module sees string-encoded JSON.

use std::fmt::Write;

use imagefinder_core::{CrawlPayload, CrawlStatus, ExchangeError};
use serde::Deserialize;
use serde_json::Value;

/// Status reported when the backend answered 200 without a status at all.
pub const MISSING_STATUS: &str = "(none)";

#[derive(Debug, Deserialize)]
struct WireCrawlResponse {
    status: Option<String>,
    images: Option<String>,
    logos: Option<String>,
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("`{field}` is not a JSON array of strings: {source}")]
    List {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<WireError> for ExchangeError {
    fn from(err: WireError) -> Self {
        ExchangeError::Parse(err.to_string())
    }
}

/// Decodes a parsed response body into a typed payload.
pub fn decode_payload(body: Option<Value>) -> Result<CrawlPayload, WireError> {
    let Some(body) = body else {
        return Ok(CrawlPayload::with_status(CrawlStatus::Unexpected(
            MISSING_STATUS.to_string(),
        )));
    };

    let wire: WireCrawlResponse = serde_json::from_value(body).map_err(WireError::Shape)?;
    let status = match wire.status.as_deref() {
        Some(raw) => CrawlStatus::from(raw),
        None => CrawlStatus::Unexpected(MISSING_STATUS.to_string()),
    };

    Ok(CrawlPayload {
        status,
        images: decode_list("images", wire.images)?,
        logos: decode_list("logos", wire.logos)?,
        message: wire.message,
    })
}

// An empty string counts as absent, like a missing field.
fn decode_list(field: &'static str, raw: Option<String>) -> Result<Option<Vec<String>>, WireError> {
    match raw {
        Some(text) if !text.is_empty() => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| WireError::List { field, source }),
        _ => Ok(None),
    }
}

/// Relative endpoint for submitting and polling a crawl of `target`.
pub fn crawl_endpoint(target: &str) -> String {
    format!("main?url={}", encode_uri_component(target))
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, byte for
/// byte compatible with what browsers send for a query component.
pub fn encode_uri_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            // Writing into a String cannot fail.
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
