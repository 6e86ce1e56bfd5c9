//! Error types for the badge pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Config and write errors are fatal and propagate out of
//! `main`; fetch errors are recovered per paper by the client's fail-soft
//! wrappers and never abort a run.

use std::path::PathBuf;

/// Errors from loading the tracked-paper configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("paper config not found: {path}")]
    NotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read paper config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file content is not valid JSON or not an array of paper entries.
    #[error("invalid paper config {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Errors from a single citation-count fetch.
///
/// These are never fatal: [`crate::client::CitationClient::fetch_one`]
/// converts them to a warning and a count of `0`.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (connection, DNS, TLS, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl FetchError {
    /// Create a status error from a code and response body.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }
}

/// Errors from writing the badge JSON file.
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    /// The output path is not writable (missing parent, permissions, etc.)
    #[error("failed to write badge to {path}: {source}")]
    Io {
        /// Path that was written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Badge payload could not be serialized
    #[error("failed to serialize badge: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_names_path() {
        let err = ConfigError::NotFound { path: PathBuf::from("config/papers.json") };
        assert!(err.to_string().contains("config/papers.json"));
    }

    #[test]
    fn test_fetch_status_error_display() {
        let err = FetchError::status(404, "Paper not found");
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Paper not found"));
    }

    #[test]
    fn test_write_error_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WriteError::Io { path: PathBuf::from("badges/out.json"), source: io };
        assert!(err.to_string().contains("badges/out.json"));
    }
}
