use std::fs;
use std::path::Path;
use std::time::Duration;

use finder_logging::{finder_info, finder_warn};
use imagefinder_client::DispatchSettings;
use imagefinder_core::{PollConfig, DEFAULT_MAX_RETRIES, DEFAULT_POLL_INTERVAL};
use serde::Deserialize;

/// Client settings as stored in an optional RON file. Missing keys keep defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ClientConfig {
    pub base_url: String,
    pub max_retries: u32,
    pub poll_interval_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let dispatch = DispatchSettings::default();
        Self {
            base_url: dispatch.base_url,
            max_retries: DEFAULT_MAX_RETRIES,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            connect_timeout_ms: dispatch.connect_timeout.as_millis() as u64,
            request_timeout_ms: dispatch.request_timeout.as_millis() as u64,
        }
    }
}

impl ClientConfig {
    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            max_retries: self.max_retries,
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }

    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

pub(crate) fn load_config(path: &Path) -> ClientConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            finder_info!("No config at {:?}, using defaults", path);
            return ClientConfig::default();
        }
        Err(err) => {
            finder_warn!("Failed to read config from {:?}: {}", path, err);
            return ClientConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            finder_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            finder_warn!("Failed to parse config from {:?}: {}", path, err);
            ClientConfig::default()
        }
    }
}
