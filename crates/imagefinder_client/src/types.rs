use std::fmt;

use imagefinder_core::{ExchangeError, HttpError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("{0}")]
    Http(HttpError),
    #[error("invalid JSON response: {0}")]
    Parse(String),
    #[error("{0}")]
    Network(String),
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(String),
}

impl From<DispatchError> for ExchangeError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Http(http) => ExchangeError::Http(http),
            DispatchError::Parse(detail) => ExchangeError::Parse(detail),
            DispatchError::Network(detail) => ExchangeError::Network(detail),
            DispatchError::InvalidEndpoint(detail) => {
                ExchangeError::Network(format!("invalid endpoint {detail}"))
            }
        }
    }
}
