//! Client configuration
//!
//! The web build has no filesystem or command line, so configuration is baked
//! in at compile time: `VAULTX_CONFIG` may hold a JSON document and
//! `VAULTX_API_URL` overrides the API base URL. Missing fields use defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL the REST paths are appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Minimum time the dashboard skeleton stays up, 0 disables it
    #[serde(default = "default_skeleton_min_ms")]
    pub skeleton_min_ms: u64,
    /// Lifetime of a notification before it is dismissed automatically
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Unread count shown on the notification bell
    #[serde(default = "default_unread_notifications")]
    pub initial_unread_notifications: u32,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_skeleton_min_ms() -> u64 {
    1000
}

fn default_toast_duration_ms() -> u64 {
    5000
}

fn default_unread_notifications() -> u32 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            skeleton_min_ms: default_skeleton_min_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            initial_unread_notifications: default_unread_notifications(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in by the build environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(option_env!("VAULTX_CONFIG"), option_env!("VAULTX_API_URL"))
    }

    fn from_sources(json: Option<&str>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match json {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(raw)?,
            _ => Self::default(),
        };
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                reason: format!("'{}' is not an http(s) URL", url),
            });
        }
        Ok(())
    }

    pub fn skeleton_min(&self) -> Duration {
        Duration::from_millis(self.skeleton_min_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
