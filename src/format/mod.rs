//! Output formatting for search summaries (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::ebay::markets::Marketplace;
use crate::ebay::models::{SearchSummary, SoldListing};

/// Formats a search summary for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the summary. The marketplace supplies the currency symbol;
    /// no conversion happens here.
    pub fn format_summary(&self, summary: &SearchSummary, marketplace: Marketplace) -> String {
        match self.format {
            OutputFormat::Json => self.json_summary(summary),
            OutputFormat::Table => self.table_summary(summary, marketplace.currency_symbol()),
            OutputFormat::Markdown => self.markdown_summary(summary, marketplace.currency_symbol()),
            OutputFormat::Csv => self.csv_listings(&summary.listings),
        }
    }

    // JSON formatting

    fn json_summary(&self, summary: &SearchSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_summary(&self, summary: &SearchSummary, symbol: &str) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Products matched: {}", summary.count));

        if summary.count > 0 {
            lines.push(String::new());
            if let Some(lowest) = &summary.lowest {
                lines.push(format!("Lowest price:  {}", Self::priced_title(lowest, symbol)));
            }
            if let Some(median) = &summary.median {
                lines.push(format!("Median price:  {}", Self::priced_title(median, symbol)));
            }
            if let Some(highest) = &summary.highest {
                lines.push(format!("Highest price: {}", Self::priced_title(highest, symbol)));
            }
            if let Some(mean) = summary.mean_price {
                lines.push(format!("Mean (average) price: {}{:.2}", symbol, mean));
            }
        }

        lines.join("\n")
    }

    fn priced_title(listing: &SoldListing, symbol: &str) -> String {
        format!("{}{:.2} - {}", symbol, listing.price, listing.title)
    }

    // Markdown formatting

    fn markdown_summary(&self, summary: &SearchSummary, symbol: &str) -> String {
        let mut lines = Vec::new();

        lines.push(format!("**Products matched:** {}", summary.count));

        if summary.count > 0 {
            lines.push(String::new());
            if let Some(lowest) = &summary.lowest {
                lines.push(format!("- **Lowest:** {}", Self::priced_title(lowest, symbol)));
            }
            if let Some(median) = &summary.median {
                lines.push(format!("- **Median:** {}", Self::priced_title(median, symbol)));
            }
            if let Some(highest) = &summary.highest {
                lines.push(format!("- **Highest:** {}", Self::priced_title(highest, symbol)));
            }
            if let Some(mean) = summary.mean_price {
                lines.push(format!("- **Mean:** {}{:.2}", symbol, mean));
            }

            lines.push(String::new());
            lines.push("| Price | Title |".to_string());
            lines.push("|-------|-------|".to_string());
            for listing in &summary.listings {
                lines.push(format!("| {}{:.2} | {} |", symbol, listing.price, listing.title));
            }
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "title,price".to_string()
    }

    fn csv_listings(&self, listings: &[SoldListing]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for listing in listings {
            lines.push(format!("{},{}", Self::csv_escape(&listing.title), listing.price));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::summarize;

    fn make_summary() -> SearchSummary {
        summarize(vec![
            SoldListing::new("Phone A", 10.0),
            SoldListing::new("Phone B", 30.0),
            SoldListing::new("Phone C", 20.0),
        ])
    }

    #[test]
    fn test_table_summary() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_summary(&make_summary(), Marketplace::Uk);

        assert!(output.contains("Products matched: 3"));
        assert!(output.contains("Lowest price:  £10.00 - Phone A"));
        assert!(output.contains("Median price:  £20.00 - Phone C"));
        assert!(output.contains("Highest price: £30.00 - Phone B"));
        assert!(output.contains("Mean (average) price: £20.00"));
    }

    #[test]
    fn test_table_empty_summary() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_summary(&SearchSummary::empty(), Marketplace::Uk);

        assert_eq!(output, "Products matched: 0");
    }

    #[test]
    fn test_table_uses_marketplace_symbol() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_summary(&make_summary(), Marketplace::Us);
        assert!(output.contains("$10.00"));
        assert!(!output.contains('£'));
    }

    #[test]
    fn test_json_summary() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&make_summary(), Marketplace::Uk);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 3);
        assert_eq!(parsed["mean_price"], 20.0);
        assert_eq!(parsed["median"]["title"], "Phone C");
        assert_eq!(parsed["listings"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_empty_summary() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&SearchSummary::empty(), Marketplace::Uk);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 0);
        assert!(parsed.get("mean_price").is_none());
    }

    #[test]
    fn test_markdown_summary() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let output = formatter.format_summary(&make_summary(), Marketplace::Uk);

        assert!(output.contains("**Products matched:** 3"));
        assert!(output.contains("- **Median:** £20.00 - Phone C"));
        assert!(output.contains("| £10.00 | Phone A |"));
    }

    #[test]
    fn test_csv_listings() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_summary(&make_summary(), Marketplace::Uk);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "title,price");
        // Listings come out sorted ascending by price.
        assert_eq!(lines[1], "Phone A,10");
        assert_eq!(lines[2], "Phone C,20");
        assert_eq!(lines[3], "Phone B,30");
    }

    #[test]
    fn test_csv_empty() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_summary(&SearchSummary::empty(), Marketplace::Uk);
        assert_eq!(output, "title,price");
    }

    #[test]
    fn test_csv_escaping() {
        let summary = summarize(vec![SoldListing::new("Phone, boxed \"mint\"", 12.5)]);
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_summary(&summary, Marketplace::Uk);

        assert!(output.contains(r#""Phone, boxed ""mint""",12.5"#));
    }
}
