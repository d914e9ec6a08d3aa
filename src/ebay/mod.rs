//! eBay-specific modules for HTTP client, extraction, and data models.

pub mod client;
pub mod extract;
pub mod markets;
pub mod models;
pub mod query;
pub mod selectors;

pub use client::{EbayClient, PageFetcher};
pub use extract::Extractor;
pub use markets::Marketplace;
pub use models::{Condition, SearchParams, SearchSummary, SoldListing};
