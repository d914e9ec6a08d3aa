//! Search command: drives the fetch → extract → summarize pipeline.

use crate::config::Config;
use crate::ebay::client::{EbayClient, PageFetcher};
use crate::ebay::extract::Extractor;
use crate::ebay::models::{SearchParams, SearchSummary};
use crate::ebay::query::{build_query_template, url_for_page};
use crate::error::Result;
use crate::format::Formatter;
use crate::stats::summarize;
use anyhow::Context;
use tracing::{debug, info};

/// Executes a sold-listing search and summarizes prices.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the search against the live site and returns formatted output.
    pub async fn execute(&self, params: &SearchParams) -> anyhow::Result<String> {
        let client = EbayClient::new(&self.config).context("Failed to create HTTP client")?;

        let summary = self.run_with_fetcher(&client, params).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_summary(&summary, self.config.marketplace))
    }

    /// Runs the search with a provided fetcher (seam for tests).
    ///
    /// Pages are fetched strictly sequentially, 1 through `params.pages`;
    /// any failure aborts the whole search rather than yielding a partial
    /// result. Statistics are computed only after the last page.
    pub async fn run_with_fetcher(
        &self,
        fetcher: &impl PageFetcher,
        params: &SearchParams,
    ) -> Result<SearchSummary> {
        params.validate()?;

        info!("Searching {} for: {}", self.config.marketplace, params.keywords.join(" "));

        let template = build_query_template(
            self.config.marketplace,
            &params.keywords,
            params.min_price.as_deref(),
            params.max_price.as_deref(),
            params.condition,
        );
        let extractor = Extractor::new(&params.keywords);

        let mut matched = Vec::new();

        for page in 1..=params.pages {
            let url = url_for_page(&template, page);
            debug!("Fetching page {}", page);

            let html = fetcher.fetch_page(&url).await?;
            let listings = extractor.extract(&html)?;

            debug!("Page {} matched {} listings", page, listings.len());
            matched.extend(listings);
        }

        info!("Matched {} listings across {} pages", matched.len(), params.pages);

        Ok(summarize(matched))
    }
}
