//! Data models for search parameters, matched listings, and summaries.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item condition filter. eBay encodes these as `LH_ItemCondition` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Refurbished,
    #[default]
    Any,
}

impl Condition {
    /// Maps free-form user input to a condition. Unrecognized values fall
    /// open to `Any` (no filter applied) rather than erroring.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "new" => Condition::New,
            "used" => Condition::Used,
            "refurbished" => Condition::Refurbished,
            _ => Condition::Any,
        }
    }

    /// Returns the `LH_ItemCondition` code, or `None` when no condition
    /// filter should be applied.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Condition::New => Some("1000"),
            Condition::Used => Some("3000"),
            Condition::Refurbished => Some("2000"),
            Condition::Any => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Refurbished => "refurbished",
            Condition::Any => "any",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Condition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Parameters for one search invocation. Constructed once, never mutated
/// while the search runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Keyword terms; listings match when any term appears in the title.
    pub keywords: Vec<String>,
    /// Minimum price bound, forwarded verbatim. Empty string counts as absent.
    pub min_price: Option<String>,
    /// Maximum price bound, forwarded verbatim. Empty string counts as absent.
    pub max_price: Option<String>,
    /// Item condition filter. `None` behaves like `Any`.
    pub condition: Option<Condition>,
    /// Number of result pages to fetch, starting from page 1.
    pub pages: u32,
}

impl SearchParams {
    /// Creates parameters for the given keywords with defaults everywhere else.
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords, min_price: None, max_price: None, condition: None, pages: 1 }
    }

    /// Checks the invariants that must hold before a search executes.
    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::Validation("at least one keyword is required".to_string()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(Error::Validation("keywords must not be blank".to_string()));
        }
        if self.pages == 0 {
            return Err(Error::Validation("page count must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// A sold listing that matched the keyword terms. Title keeps its original
/// casing; price is the currency-stripped numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoldListing {
    pub title: String,
    pub price: f64,
}

impl SoldListing {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self { title: title.into(), price }
    }
}

/// Price statistics over the matched listings of one search. Computed once
/// per search and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    /// Number of matched listings across all fetched pages.
    pub count: usize,
    /// Arithmetic mean price. Absent when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_price: Option<f64>,
    /// Median listing. For an even count the price is the average of the two
    /// central listings, paired with the upper-middle listing's title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<SoldListing>,
    /// Cheapest matched listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<SoldListing>,
    /// Most expensive matched listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<SoldListing>,
    /// All matched listings, sorted ascending by price.
    pub listings: Vec<SoldListing>,
}

impl SearchSummary {
    /// The summary for a search that matched nothing.
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean_price: None,
            median: None,
            lowest: None,
            highest: None,
            listings: Vec::new(),
        }
    }
}
