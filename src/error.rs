//! Error types for the search run.
//!
//! Configuration problems stop the program before any request is made.
//! Fetch problems stop it after a single attempt.

use std::path::PathBuf;

/// The command line did not describe a usable search.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `--query` nor `--queryfile` was given.
    #[error("You must specify either --query <query> or --queryfile <file>.")]
    MissingQuery,

    /// The query file could not be read.
    #[error("Failed to read query file `{}': {source}", .path.display())]
    QueryFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query file has no non-blank line.
    #[error("Query file `{}' is empty", .0.display())]
    EmptyQueryFile(PathBuf),
}

/// Downloading the results page failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with an error status.
    #[error("Opening URL: `{url}' failed: {source}")]
    Status {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Opening URL: `{url}' timed out: {source}")]
    TimedOut {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Connection refused or reset, DNS failure, unreadable body.
    #[error("Opening URL: `{url}' failed, transport error: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            FetchError::TimedOut { url, source }
        } else if source.is_status() {
            FetchError::Status { url, source }
        } else {
            FetchError::Transport { url, source }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::TimedOut { url, .. }
            | FetchError::Transport { url, .. } => url,
        }
    }
}
