use crate::models::SearchOptions;

const SEARCH_URL: &str = "http://newyork.craigslist.org/search/fuo";
const HAS_PICTURE_FILTER: &str = "&hasPic=1";

/// Builds the results-page URL for a furniture search.
///
/// Each value is percent-encoded on its own, so a query such as `a&b=c`
/// stays inside the `query` parameter.
pub fn build_search_url(options: &SearchOptions) -> String {
    let picture_filter = if options.exclude_no_picture {
        HAS_PICTURE_FILTER
    } else {
        ""
    };

    format!(
        "{}?query={}&srchType=T&minAsk={}&maxAsk={}{}",
        SEARCH_URL,
        urlencoding::encode(&options.query),
        urlencoding::encode(&options.min_price),
        urlencoding::encode(&options.max_price),
        picture_filter
    )
}
