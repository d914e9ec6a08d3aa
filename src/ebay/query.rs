//! Query-URL construction for sold-listing searches.
//!
//! Builds a URL template with a literal page placeholder so the same search
//! can be replayed across pages deterministically.

use crate::ebay::markets::Marketplace;
use crate::ebay::models::Condition;

/// Literal placeholder substituted with the page number per fetch.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Builds the search URL template for the given parameters.
///
/// The result always requests sold, completed listings (`LH_Complete=1`,
/// `LH_Sold=1`) and contains exactly one [`PAGE_PLACEHOLDER`].
///
/// Keywords are joined with a literal `%20` and are otherwise passed through
/// unescaped; callers are responsible for pre-sanitizing them.
pub fn build_query_template(
    marketplace: Marketplace,
    keywords: &[String],
    min_price: Option<&str>,
    max_price: Option<&str>,
    condition: Option<Condition>,
) -> String {
    let main_keyword = keywords.join("%20");

    let mut params: Vec<(&str, String)> = vec![
        ("_from", "R40".to_string()),
        ("_nkw", main_keyword),
        ("_sacat", "0".to_string()),
        ("_fsrp", "1".to_string()),
        ("LH_Complete", "1".to_string()),
        ("LH_Sold", "1".to_string()),
        ("_pgn", PAGE_PLACEHOLDER.to_string()),
        ("rt", "nc".to_string()),
    ];

    if let Some(code) = condition.unwrap_or_default().code() {
        params.push(("LH_ItemCondition", code.to_string()));
    }

    if let Some(min) = min_price.filter(|p| !p.is_empty()) {
        params.push(("_udlo", min.to_string()));
    }
    if let Some(max) = max_price.filter(|p| !p.is_empty()) {
        params.push(("_udhi", max.to_string()));
    }

    let query_string =
        params.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join("&");

    format!("{}?{}", marketplace.search_url(), query_string)
}

/// Substitutes the page placeholder to produce the concrete URL for a page.
pub fn url_for_page(template: &str, page: u32) -> String {
    template.replace(PAGE_PLACEHOLDER, &page.to_string())
}
