//! `--verbose` diagnostics.
//!
//! Everything goes to stderr with a `craigslister:` prefix; stdout carries
//! only the listing tuples.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const PREFIX: &str = "craigslister: ";

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Formats a diagnostic line, or `None` when verbose output is off.
pub fn render(enabled: bool, args: fmt::Arguments<'_>) -> Option<String> {
    enabled.then(|| format!("{}{}", PREFIX, args))
}

pub fn emit(args: fmt::Arguments<'_>) {
    if let Some(line) = render(is_verbose(), args) {
        eprintln!("{}", line);
    }
}

pub fn note_search_url(url: &str) {
    emit(format_args!("search URL: {}", url));
}

pub fn note_saved_page(path: &Path) {
    emit(format_args!("reading saved page, network skipped: {}", path.display()));
}

/// `--historyfile` is accepted but never read or written.
pub fn note_ignored_history_file(path: &Path) {
    emit(format_args!("ignoring history file: {}", path.display()));
}

/// Prints to stderr only when `--verbose` was passed.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::verbose::emit(format_args!($($arg)*))
    };
}
