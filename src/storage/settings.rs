//! Settings storage
//!
//! Manages persistence of the panel settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
const DEFAULT_MODELS_PATH: &str = "/api/local-models";

/// Panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Base URL of the backend reporting local models
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Path of the model list resource on the backend
    #[serde(default = "default_models_path")]
    pub models_path: String,
    /// Seconds between two automatic reads of the model list
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_models_path() -> String {
    DEFAULT_MODELS_PATH.to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            models_path: default_models_path(),
            refresh_interval_secs: default_refresh_interval(),
            request_timeout_secs: default_request_timeout(),
            theme: default_theme(),
        }
    }
}

impl PanelSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        self.refresh_interval_secs = self.refresh_interval_secs.clamp(5, 3600);
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 120);

        let server_url = self.server_url.trim().trim_end_matches('/');
        if server_url.is_empty() {
            self.server_url = default_server_url();
        } else {
            self.server_url = server_url.to_string();
        }

        let models_path = self.models_path.trim();
        if models_path.is_empty() {
            self.models_path = default_models_path();
        } else if !models_path.starts_with('/') {
            self.models_path = format!("/{}", models_path);
        } else {
            self.models_path = models_path.to_string();
        }

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }
    }

    /// Full URL of the model list resource
    pub fn models_url(&self) -> String {
        format!("{}{}", self.server_url, self.models_path)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> PanelSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            PanelSettings::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<PanelSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(PanelSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: PanelSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &PanelSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to a specific file
pub fn save_settings_to(path: &Path, settings: &PanelSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
