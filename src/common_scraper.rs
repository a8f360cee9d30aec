use crate::models::{ListingRecord, SearchOptions};
use crate::parser;
use crate::search_url;
use crate::sources::{CraigslistSource, ListingSource, LocalFileSource};
use crate::tui::StatusReporter;
use crate::verbose;
use anyhow::Result;
use std::io::Write;

pub struct SearchResult {
    pub source: String,
    pub listings: Vec<ListingRecord>,
}

/// Chooses the saved page when `--debug` was given, the live search otherwise.
pub fn source_for(options: &SearchOptions) -> Result<Box<dyn ListingSource>> {
    match &options.debug_file_path {
        Some(path) => {
            verbose::note_saved_page(path);
            Ok(Box::new(LocalFileSource::new(path.clone())))
        }
        None => {
            let url = search_url::build_search_url(options);
            verbose::note_search_url(&url);
            Ok(Box::new(CraigslistSource::new(url)?))
        }
    }
}

/// Loads the whole document before extracting, so a failed load yields no listings at all.
pub fn run_search<S, W>(source: &S, reporter: &mut StatusReporter<W>) -> Result<SearchResult>
where
    S: ListingSource + ?Sized,
    W: Write,
{
    let location = source.location();

    if source.is_remote() {
        reporter.start_download()?;
    } else {
        reporter.start_local_read(&location)?;
    }

    let document = source.load_document()?;
    verbose!("loaded {} bytes from {}", document.len(), location);

    let listings: Vec<ListingRecord> = parser::extract_listings(&document).collect();
    reporter.finish(listings.len())?;

    Ok(SearchResult {
        source: location,
        listings,
    })
}
