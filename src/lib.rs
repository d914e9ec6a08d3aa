//! ebay-soldstats - Price statistics over eBay sold listings
//!
//! Searches sold, completed listings, filters result titles against keyword
//! terms, and reports count, mean, median, minimum, and maximum prices over
//! the matched set. Uses TLS fingerprint emulation for reliable scraping
//! without detection.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod error;
pub mod format;
pub mod prompt;
pub mod stats;

pub use config::Config;
pub use ebay::markets::Marketplace;
pub use ebay::models::{Condition, SearchParams, SearchSummary, SoldListing};
pub use error::Error;
