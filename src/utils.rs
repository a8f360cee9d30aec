use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a saved results page. Invalid UTF-8 is replaced rather than rejected,
/// since older result pages are often Latin-1.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .context(format!("Failed to open input file: {}", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Picks the search text: `--query` first, then the first non-blank line of `--queryfile`.
pub fn resolve_query(query: Option<String>, query_file: Option<&Path>) -> Result<String, ConfigError> {
    if let Some(query) = query {
        return Ok(query);
    }

    match query_file {
        Some(path) => load_query_from_file(path),
        None => Err(ConfigError::MissingQuery),
    }
}

pub fn load_query_from_file(path: &Path) -> Result<String, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::QueryFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::EmptyQueryFile(path.to_path_buf()))
}
