use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::prompt::{ModelTable, ProcessingMode, ToneStyle};

/// Base URL of the Generative Language REST API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub models: ModelTable,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Mode selected at startup.
    #[serde(default)]
    pub mode: ProcessingMode,
    /// Tone selected at startup.
    #[serde(default)]
    pub tone: ToneStyle,
    /// Request timeout in seconds (default: 120).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Directory that receives `humanized-text.txt`. Current directory if unset.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API, without the `/models/...` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the key (default: `API_KEY`).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_timeout() -> u32 {
    120
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    GEMINI_API_BASE.to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::default(),
            tone: ToneStyle::default(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            export_dir: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl Defaults {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
