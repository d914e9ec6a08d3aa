//! Price statistics over the matched listings of one search.

use crate::ebay::models::{SearchSummary, SoldListing};

/// Sorts the matched listings ascending by price and derives the summary.
///
/// An empty input yields `count = 0` with every other field absent; that is
/// a valid terminal outcome, not an error. The sort is stable, so listings
/// with equal prices keep their page-then-document order.
pub fn summarize(mut listings: Vec<SoldListing>) -> SearchSummary {
    if listings.is_empty() {
        return SearchSummary::empty();
    }

    listings.sort_by(|a, b| a.price.total_cmp(&b.price));

    let count = listings.len();
    let mean_price = listings.iter().map(|l| l.price).sum::<f64>() / count as f64;

    let mid = count / 2;
    let median = if count % 2 == 1 {
        listings[mid].clone()
    } else {
        // Even count: average the two central prices, but report the
        // upper-middle listing's title alongside that averaged price.
        SoldListing::new(
            listings[mid].title.clone(),
            (listings[mid - 1].price + listings[mid].price) / 2.0,
        )
    };

    SearchSummary {
        count,
        mean_price: Some(mean_price),
        median: Some(median),
        lowest: Some(listings[0].clone()),
        highest: Some(listings[count - 1].clone()),
        listings,
    }
}
