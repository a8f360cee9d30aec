use std::fmt;
use std::path::PathBuf;

/// Everything needed to build one search and decide where its markup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    pub min_price: String,
    pub max_price: String,
    /// Restrict results to ads with at least one photo (`&hasPic=1`).
    pub exclude_no_picture: bool,
    /// Read markup from this file instead of the network.
    pub debug_file_path: Option<PathBuf>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_price: "min".to_string(),
            max_price: "max".to_string(),
            exclude_no_picture: true,
            debug_file_path: None,
        }
    }
}

/// One ad recovered from a results page. All fields are kept exactly as matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub month: String,
    pub day: String,
    /// May be relative to the site root.
    pub detail_url: String,
    pub title: String,
    /// Digits only, without the dollar sign.
    pub price: String,
    pub location_hint: String,
}

impl ListingRecord {
    pub fn fields(&self) -> [&str; 6] {
        [
            self.month.as_str(),
            self.day.as_str(),
            self.detail_url.as_str(),
            self.title.as_str(),
            self.price.as_str(),
            self.location_hint.as_str(),
        ]
    }
}

// Prints the raw tuple, e.g. ["Jan", "5", "/item/1", "Leather Sofa", "150", "Brooklyn"]
impl fmt::Display for ListingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.fields())
    }
}
