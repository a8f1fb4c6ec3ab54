//! Error types for the feed pipeline.
//!
//! Library stages return typed errors; the binary composes them with
//! `anyhow` and decides which ones abort the run.

use thiserror::Error;

/// Errors from the single page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed before a response arrived (DNS, connect,
    /// timeout) or the body could not be read.
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Errors from rendering and persisting the feed document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Creating or writing the output file failed.
    #[error("failed to write feed file: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization failed.
    #[error("failed to serialize feed: {0}")]
    Xml(#[from] rss::Error),
}
