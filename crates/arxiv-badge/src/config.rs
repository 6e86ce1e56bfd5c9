//! Configuration for the badge pipeline.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Default per-request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Default values for the CLI surface and badge payload.
pub mod defaults {
    /// Default path of the tracked-paper list.
    pub const CONFIG_PATH: &str = "config/papers.json";

    /// Default path of the badge JSON output.
    pub const OUTPUT_PATH: &str = "arxiv_citations.json";

    /// Default badge label text.
    pub const LABEL: &str = "arXiv Citations";

    /// Default badge color.
    pub const COLOR: &str = "blue";
}

/// Runtime configuration for the citation client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the Graph API (overridable for testing with mock servers).
    pub graph_api_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration with the given per-request timeout.
    #[must_use]
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::REQUEST_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_points_at_graph_api() {
        let config = Config::default();
        assert_eq!(config.graph_api_url, api::GRAPH_API);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_custom_timeout() {
        let config = Config::new(Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_for_testing_rewrites_base_url() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
    }
}
