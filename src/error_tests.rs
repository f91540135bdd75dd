//! Tests for error types

use super::*;

#[test]
fn test_catalog_error_messages() {
    assert_eq!(CatalogError::Validation.to_string(), "fill in both fields");
    assert_eq!(
        CatalogError::PendingComment.to_string(),
        "comment on the previous song first"
    );
}

#[test]
fn test_incomplete_lists_missing_fields() {
    let err = UploadError::Incomplete {
        missing: vec!["cover", "audio"],
    };
    assert_eq!(err.to_string(), "Missing required fields: cover, audio");
}

#[test]
fn test_status_error_message() {
    let err = FetchError::Status { code: 503 };
    assert_eq!(err.to_string(), "Server returned status 503");
}

#[test]
fn test_config_error_wraps_into_startup_error() {
    let err: SongboardError = ConfigError::Parse {
        path: "config.toml".to_string(),
        message: "expected `=`".to_string(),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid TOML in config.toml: expected `=`"
    );
}
