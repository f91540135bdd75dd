// Configuration type definitions

use serde::Deserialize;

/// Default backend base URL (the development server of the upload page)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Default quiet interval before a suggestion lookup fires
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Default bound on every backend request
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
/// Default number of suggestion rows shown at once
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Backend server configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Suggestion engine configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            debounce_ms: default_debounce_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}
