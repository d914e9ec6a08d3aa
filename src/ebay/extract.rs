//! Extraction of matched (title, price) pairs from result-page markup.

use crate::ebay::models::SoldListing;
use crate::ebay::selectors::search;
use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Extracts sold listings whose title contains at least one target term.
pub struct Extractor {
    /// Target terms, lower-cased once at construction.
    terms: Vec<String>,
}

impl Extractor {
    /// Creates an extractor for the given target terms.
    pub fn new(terms: &[String]) -> Self {
        Self { terms: terms.iter().map(|t| t.to_lowercase()).collect() }
    }

    /// Parses one result page and returns the matched listings in document
    /// order. Listings missing either a title or a price fragment are
    /// skipped whole; a matched listing with unparseable price text aborts
    /// extraction.
    pub fn extract(&self, html: &str) -> Result<Vec<SoldListing>> {
        let document = Html::parse_document(html);
        let mut listings = Vec::new();

        for item in document.select(&search::RESULT) {
            let Some(title) = first_text(&item, &search::TITLE) else {
                trace!("Skipping listing card without title");
                continue;
            };
            let Some(price_text) = first_text(&item, &search::PRICE) else {
                trace!("Skipping listing card without price: {}", title);
                continue;
            };

            if !self.matches(&title) {
                continue;
            }

            // Normalize only after the match test, so malformed price text on
            // listings we never report cannot abort the run.
            let price = normalize_price(&price_text)?;
            listings.push(SoldListing::new(title, price));
        }

        debug!("Extracted {} matched listings from page", listings.len());
        Ok(listings)
    }

    /// Case-insensitive substring test against any target term.
    fn matches(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term))
    }
}

/// Returns the trimmed text of the first element matching `selector`, or
/// `None` when no such element exists.
fn first_text(item: &ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(|e| e.text().collect::<String>().trim().to_string())
}

/// Strips everything that is not a digit or decimal point and parses the
/// remainder. An invalid remainder (empty, multiple dots) signals a markup
/// change upstream and must propagate.
pub fn normalize_price(text: &str) -> Result<f64> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse::<f64>().map_err(|_| Error::Price { text: text.trim().to_string() })
}
