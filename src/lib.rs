pub mod common_scraper;
pub mod error;
pub mod models;
pub mod parser;
pub mod search_url;
pub mod sources;
pub mod tui;
pub mod utils;
pub mod verbose;
