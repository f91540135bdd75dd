use thiserror::Error;

/// Startup errors for songboard
#[derive(Debug, Error)]
pub enum SongboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejections raised by the catalog when a submission is not allowed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Title or artist is blank
    #[error("fill in both fields")]
    Validation,

    /// The open slot has not been commented yet
    #[error("comment on the previous song first")]
    PendingComment,
}

/// Failures of a backend call
///
/// Every variant is shown to the user as the same error state; the
/// variant only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server returned status {code}")]
    Status { code: u16 },

    #[error("Could not decode response: {0}")]
    Decode(String),

    /// No worker is attached to carry the request
    #[error("Backend unavailable")]
    Unavailable,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status {
                code: status.as_u16(),
            }
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Publish refused because the form is incomplete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Missing required fields: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("A song is already being published")]
    AlreadyPublishing,
}

/// Errors while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
