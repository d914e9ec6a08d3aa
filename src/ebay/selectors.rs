//! CSS selectors for eBay search result pages.
//!
//! This file contains all CSS selectors used for parsing eBay result markup.
//! Update this file when eBay changes their HTML structure.
//!
//! **Update process**: When extraction starts skipping everything or price
//! parsing fails, capture an HTML sample, update selectors, and add a test
//! fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for sold-listing search result pages.
pub mod search {
    use super::*;

    /// Listing card container - one per search result.
    pub static RESULT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".s-item").unwrap());

    /// Listing title text.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__title span").unwrap());

    /// Sold price. The POSITIVE class marks the realized sale price as
    /// opposed to struck-through or range prices.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__price .POSITIVE").unwrap());
}
