//! Recovers listings from a search-results page.
//!
//! Each result on the page is a flat block:
//!
//! ```text
//! <p> Jan 5 - <a href="/fuo/123.html">Leather Sofa - $150 - </a><font size="-1"> (Brooklyn)
//! ```
//!
//! One pattern is scanned across the whole document. Blocks that do not fit
//! it are skipped without error, so a change to the site's markup shows up
//! only as zero listings.

use crate::models::ListingRecord;
use regex::{CaptureMatches, Captures, Regex};
use std::sync::LazyLock;

const MONTHS: &str = "Jan|Feb|Mar|Apr|May|June|July|Aug|Sept|Oct|Nov|Dec";

// `(?-u:\s)` keeps whitespace ASCII only, so a non-breaking space between fields does not match.
#[allow(clippy::expect_used)]
static LISTING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        concat!(
            r"<p>(?-u:\s)*({})(?-u:\s)+([0-9]+)(?-u:\s)*-(?-u:\s)*",
            r#"<a href="([^"]+)">(?-u:\s)*([^<]+) - \$([0-9]+) -(?-u:\s)*</a>"#,
            r"(<font[^>]+>)?(?-u:\s)*\(([^)]+)\)(?-u:\s)*",
        ),
        MONTHS
    ))
    .expect("listing pattern")
});

// Capture group indexes in LISTING_PATTERN. Group 6 is the optional font tag.
const MONTH: usize = 1;
const DAY: usize = 2;
const DETAIL_URL: usize = 3;
const TITLE: usize = 4;
const PRICE: usize = 5;
const LOCATION: usize = 7;

/// Lazily yields listings in document order.
pub struct Listings<'d> {
    matches: CaptureMatches<'static, 'd>,
}

impl Iterator for Listings<'_> {
    type Item = ListingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|captures| record_from(&captures))
    }
}

/// Scans `document` for listing blocks. Call again to restart the scan.
pub fn extract_listings(document: &str) -> Listings<'_> {
    Listings {
        matches: LISTING_PATTERN.captures_iter(document),
    }
}

fn record_from(captures: &Captures<'_>) -> ListingRecord {
    let field = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    ListingRecord {
        month: field(MONTH),
        day: field(DAY),
        detail_url: field(DETAIL_URL),
        title: field(TITLE),
        price: field(PRICE),
        location_hint: field(LOCATION),
    }
}
