//! Shields.io endpoint badge payload.
//!
//! Produces JSON conforming to the Shields.io endpoint badge schema
//! (<https://shields.io/endpoint>) so citation counts can be rendered as
//! live badges in a repository README.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WriteError;

/// Shields.io endpoint schema version; always the literal `1`.
pub const SCHEMA_VERSION: u32 = 1;

/// A Shields.io endpoint badge payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeData {
    /// Schema version, fixed at `1`.
    pub schema_version: u32,

    /// Badge label text.
    pub label: String,

    /// Badge message: the decimal string form of the citation total.
    pub message: String,

    /// Badge color name (e.g., "blue", "green"). Passed through unchanged;
    /// Shields.io tolerates arbitrary strings here, so we do too.
    pub color: String,
}

/// Build a badge payload for a citation total.
#[must_use]
pub fn build_badge(total: u64, label: &str, color: &str) -> BadgeData {
    BadgeData {
        schema_version: SCHEMA_VERSION,
        label: label.to_string(),
        message: total.to_string(),
        color: color.to_string(),
    }
}

/// Serialize a badge payload to a JSON file, overwriting any existing file.
///
/// Returns the path written, for confirmation by the caller.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the path is not writable and
/// [`WriteError::Serialize`] if the payload cannot be serialized.
pub fn write_badge(badge: &BadgeData, path: &Path) -> Result<PathBuf, WriteError> {
    let json = serde_json::to_string(badge)?;
    std::fs::write(path, json)
        .map_err(|source| WriteError::Io { path: path.to_path_buf(), source })?;

    tracing::info!(path = %path.display(), "Badge JSON written");
    Ok(path.to_path_buf())
}
