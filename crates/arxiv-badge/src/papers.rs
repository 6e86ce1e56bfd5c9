//! Tracked-paper configuration.
//!
//! Reads the list of papers (title + arXiv ID) from a JSON file shaped as
//! an array of `{"title": ..., "arxiv_id": ...}` objects.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One tracked paper from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperEntry {
    /// Human-readable paper title.
    pub title: String,

    /// arXiv identifier (e.g., "2503.24235"), the lookup key for the
    /// citation-count service.
    pub arxiv_id: String,
}

/// Load the list of tracked papers from a JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::Io`] if it cannot be read, and [`ConfigError::Parse`] if
/// the content is not a JSON array of paper entries.
pub fn load_papers(path: &Path) -> Result<Vec<PaperEntry>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    let papers: Vec<PaperEntry> = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    tracing::info!(count = papers.len(), path = %path.display(), "Loaded paper config");
    Ok(papers)
}

/// Project the arXiv IDs out of a list of paper entries, preserving order.
#[must_use]
pub fn extract_arxiv_ids(papers: &[PaperEntry]) -> Vec<String> {
    papers.iter().map(|p| p.arxiv_id.clone()).collect()
}
