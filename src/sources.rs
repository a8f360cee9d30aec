use crate::error::FetchError;
use crate::utils;
use crate::verbose;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::path::PathBuf;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Somewhere a results page can be loaded from.
pub trait ListingSource {
    /// Where the markup comes from, for status output.
    fn location(&self) -> String;
    fn is_remote(&self) -> bool;
    fn load_document(&self) -> Result<String>;
}

/// Downloads the results page with a single GET.
pub struct CraigslistSource {
    url: String,
    client: Client,
}

impl CraigslistSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    fn fetch(&self) -> Result<String, FetchError> {
        verbose!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetchError::from_reqwest(&self.url, e))?;

        verbose!("response status: {}", response.status());

        response
            .text()
            .map_err(|e| FetchError::from_reqwest(&self.url, e))
    }
}

impl ListingSource for CraigslistSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn is_remote(&self) -> bool {
        true
    }

    fn load_document(&self) -> Result<String> {
        match self.fetch() {
            Ok(body) => Ok(body),
            Err(e) => {
                eprintln!("{}", e);
                Err(e.into())
            }
        }
    }
}

/// Reads a saved results page instead of touching the network (`--debug`).
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for LocalFileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn is_remote(&self) -> bool {
        false
    }

    fn load_document(&self) -> Result<String> {
        utils::read_document(&self.path)
    }
}
