//! Semantic Scholar citation client.
//!
//! One GET per paper against the Graph API, strictly sequential. A failed
//! fetch contributes `0` to the total instead of aborting the run: the badge
//! should degrade gracefully when a single paper is unreachable.

use reqwest::Client;

use crate::config::Config;
use crate::error::{FetchError, FetchResult};

/// Client for the Semantic Scholar Graph API citation-count endpoint.
#[derive(Debug, Clone)]
pub struct CitationClient {
    /// HTTP client.
    client: Client,

    /// Graph API base URL.
    graph_api_url: String,
}

impl CitationClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, graph_api_url: config.graph_api_url.clone() })
    }

    /// Fetch the citation count for a single arXiv paper.
    ///
    /// A 2xx body without a `citationCount` field counts as `0`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or non-success HTTP status.
    pub async fn citation_count(&self, arxiv_id: &str) -> FetchResult<u64> {
        let url = format!("{}/paper/ARXIV:{}", self.graph_api_url, arxiv_id);
        let params = [("fields", "citationCount")];

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::status(status.as_u16(), message));
        }

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct PaperCitations {
            #[serde(default)]
            citation_count: Option<u64>,
        }

        let paper: PaperCitations = response.json().await?;
        Ok(paper.citation_count.unwrap_or(0))
    }

    /// Fetch the citation count for one paper, failing soft to `0`.
    ///
    /// Any transport error, non-success status, or malformed body is logged
    /// as a warning and yields `0` so one unreachable paper never aborts the
    /// whole run.
    pub async fn fetch_one(&self, arxiv_id: &str) -> u64 {
        match self.citation_count(arxiv_id).await {
            Ok(count) => {
                tracing::info!(arxiv_id, count, "Fetched citation count");
                count
            }
            Err(err) => {
                tracing::warn!(arxiv_id, error = %err, "Failed to fetch citations, counting 0");
                0
            }
        }
    }

    /// Fetch and sum citation counts for a list of arXiv papers.
    ///
    /// Fetches are issued one at a time; an empty list yields `0`.
    pub async fn fetch_total(&self, arxiv_ids: &[String]) -> u64 {
        let mut total = 0;
        for arxiv_id in arxiv_ids {
            total += self.fetch_one(arxiv_id).await;
        }
        tracing::info!(papers = arxiv_ids.len(), total, "Summed citation counts");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_succeeds() {
        let client = CitationClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_is_cloneable() {
        let client = CitationClient::new(&Config::default()).unwrap();
        let _cloned = client.clone();
    }
}
