use std::fmt;

/// Crawl status as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlStatus {
    Completed,
    Error,
    InProgress,
    /// Any status string outside the known set, kept verbatim.
    Unexpected(String),
}

impl From<&str> for CrawlStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "completed" => CrawlStatus::Completed,
            "error" => CrawlStatus::Error,
            "in_progress" => CrawlStatus::InProgress,
            other => CrawlStatus::Unexpected(other.to_string()),
        }
    }
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlStatus::Completed => write!(f, "completed"),
            CrawlStatus::Error => write!(f, "error"),
            CrawlStatus::InProgress => write!(f, "in_progress"),
            CrawlStatus::Unexpected(raw) => write!(f, "{raw}"),
        }
    }
}

/// Typed crawl response. Image lists are already decoded and in display order;
/// `None` means the backend sent no list at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPayload {
    pub status: CrawlStatus,
    pub images: Option<Vec<String>>,
    pub logos: Option<Vec<String>>,
    pub message: Option<String>,
}

impl CrawlPayload {
    pub fn with_status(status: CrawlStatus) -> Self {
        Self {
            status,
            images: None,
            logos: None,
            message: None,
        }
    }

    pub fn in_progress() -> Self {
        Self::with_status(CrawlStatus::InProgress)
    }

    pub fn completed(images: Option<Vec<String>>, logos: Option<Vec<String>>) -> Self {
        Self {
            images,
            logos,
            ..Self::with_status(CrawlStatus::Completed)
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::with_status(CrawlStatus::Error)
        }
    }
}
