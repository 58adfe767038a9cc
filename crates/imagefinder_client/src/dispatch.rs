use std::time::Duration;

use finder_logging::finder_debug;
use imagefinder_core::HttpError;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::{DispatchError, HttpMethod};

#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Backend root that endpoints such as `main?url=...` are resolved against.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A single request/response exchange with the backend. No retries, no caching.
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    /// `Ok(None)` means a 200 with an empty body.
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<Option<Value>, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDispatcher {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestDispatcher {
    pub fn new(settings: DispatchSettings) -> Result<Self, DispatchError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| DispatchError::InvalidEndpoint(format!("{}: {err}", settings.base_url)))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| DispatchError::Network(err.to_string()))?;
        Ok(Self { base_url, client })
    }
}

#[async_trait::async_trait]
impl Dispatcher for ReqwestDispatcher {
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<Option<Value>, DispatchError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|err| DispatchError::InvalidEndpoint(format!("{endpoint}: {err}")))?;

        let mut request = self.client.request(method.into(), url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let raw_body = response.text().await.map_err(map_reqwest_error)?;
        finder_debug!(
            "{} {} -> {} ({} bytes)",
            method,
            endpoint,
            status.as_u16(),
            raw_body.len()
        );

        if status != StatusCode::OK {
            return Err(DispatchError::Http(HttpError {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                raw_body,
            }));
        }

        if raw_body.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw_body)
            .map(Some)
            .map_err(|err| DispatchError::Parse(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> DispatchError {
    if err.is_timeout() {
        return DispatchError::Network(format!("request timed out: {err}"));
    }
    if err.is_connect() {
        return DispatchError::Network(format!("connection failed: {err}"));
    }
    DispatchError::Network(err.to_string())
}
