use craigslister::common_scraper::{run_search, source_for};
use craigslister::models::SearchOptions;
use craigslister::parser::extract_listings;
use craigslister::sources::ListingSource;
use craigslister::tui::StatusReporter;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/search_results.html")
}

fn fixture() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

#[test]
fn results_page_yields_well_formed_listings_in_order() {
    let html = fixture();
    let titles: Vec<String> = extract_listings(&html).map(|l| l.title).collect();

    assert_eq!(
        titles,
        vec![
            "Leather Sofa",
            "West Elm couch, great shape",
            "Sleeper Sofa",
            "Futon couch",
        ]
    );
}

#[test]
fn flagged_listing_keeps_its_location() {
    let html = fixture();
    let west_elm = extract_listings(&html)
        .find(|l| l.detail_url == "/mnh/fuo/987654000.html")
        .unwrap();

    assert_eq!(west_elm.month, "Jan");
    assert_eq!(west_elm.day, "9");
    assert_eq!(west_elm.price, "400");
    assert_eq!(west_elm.location_hint, "Upper West Side");
}

#[test]
fn absolute_detail_links_are_kept_verbatim() {
    let html = fixture();
    let futon = extract_listings(&html).last().unwrap();

    assert_eq!(futon.detail_url, "http://newyork.craigslist.org/stn/fuo/987649999.html");
    assert_eq!(futon.day, "8");
    assert_eq!(futon.location_hint, "Staten Island");
}

#[test]
fn changed_markup_silently_yields_nothing() {
    let html = fixture().replace("<a href=", "<a class=\"result\" href=");
    assert_eq!(extract_listings(&html).count(), 0);
}

#[test]
fn debug_file_run_never_touches_the_network() {
    let options = SearchOptions {
        query: "couch".to_string(),
        debug_file_path: Some(fixture_path()),
        ..SearchOptions::default()
    };

    let source = source_for(&options).unwrap();
    assert!(!source.is_remote());

    let mut reporter = StatusReporter::new(Vec::new());
    let result = run_search(source.as_ref(), &mut reporter).unwrap();
    assert_eq!(result.listings.len(), 4);
    assert_eq!(
        result.listings[0].to_string(),
        r#"["Jan", "9", "/brk/fuo/987654321.html", "Leather Sofa", "150", "Brooklyn"]"#
    );

    let status = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(status.contains("Reading listings from"));
    assert!(status.contains("Found 4 listings"));
}
