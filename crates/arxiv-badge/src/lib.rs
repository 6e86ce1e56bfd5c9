//! arXiv Citation Badge Generator
//!
//! Fetches citation counts for a configured list of arXiv papers from the
//! Semantic Scholar Graph API, sums them, and writes a JSON file conforming
//! to the Shields.io endpoint badge schema, so the total can be rendered as
//! a live badge in a repository README.
//!
//! The pipeline is a straight line: load the tracked papers, fetch each
//! paper's citation count sequentially, build the badge payload, write it.
//! A paper whose fetch fails contributes `0` to the total rather than
//! aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use arxiv_badge::badge::{build_badge, write_badge};
//! use arxiv_badge::client::CitationClient;
//! use arxiv_badge::config::Config;
//! use arxiv_badge::papers::{extract_arxiv_ids, load_papers};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let papers = load_papers(Path::new("config/papers.json"))?;
//!     let ids = extract_arxiv_ids(&papers);
//!
//!     let client = CitationClient::new(&Config::default())?;
//!     let total = client.fetch_total(&ids).await;
//!
//!     let badge = build_badge(total, "arXiv Citations", "blue");
//!     write_badge(&badge, Path::new("arxiv_citations.json"))?;
//!     Ok(())
//! }
//! ```

pub mod badge;
pub mod client;
pub mod config;
pub mod error;
pub mod papers;

pub use badge::BadgeData;
pub use client::CitationClient;
pub use config::Config;
pub use error::{ConfigError, FetchError, WriteError};
pub use papers::PaperEntry;
