//! ebay-soldstats - Price statistics over eBay sold listings
//!
//! A CLI that searches sold, completed listings and summarizes realized
//! prices, with TLS fingerprint emulation for reliable scraping.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebay_soldstats::commands::SearchCommand;
use ebay_soldstats::config::{Config, OutputFormat};
use ebay_soldstats::ebay::markets::Marketplace;
use ebay_soldstats::ebay::models::Condition;
use ebay_soldstats::prompt::{PartialParams, Prompter};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ebay-soldstats",
    version,
    about = "Price statistics over eBay sold listings",
    long_about = "Searches eBay sold/completed listings, filters titles by keyword, and reports count, mean, median, minimum, and maximum prices over the matched set."
)]
struct Cli {
    /// eBay marketplace to search
    #[arg(short, long, default_value = "uk", global = true)]
    marketplace: Marketplace,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "EBAY_PROXY")]
    proxy: Option<String>,

    /// Delay between requests in milliseconds
    #[arg(long, default_value = "2000", global = true, env = "EBAY_DELAY")]
    delay: u64,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Never prompt; missing parameters take their defaults
    #[arg(long, global = true)]
    no_input: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search sold listings and summarize prices
    #[command(alias = "s")]
    Search {
        /// Search keywords (one or more)
        keywords: Vec<String>,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<String>,

        /// Item condition (new, used, refurbished, or any)
        #[arg(long)]
        condition: Option<Condition>,

        /// Number of result pages to fetch
        #[arg(short, long)]
        pages: Option<u32>,
    },

    /// List supported marketplaces
    Markets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.marketplace = cli.marketplace;
    config.format = cli.format;
    config.delay_ms = cli.delay;

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Search { keywords, min_price, max_price, condition, pages } => {
            let partial = PartialParams { keywords, min_price, max_price, condition, pages }
                .with_config_defaults(&config);

            let cmd = SearchCommand::new(config);

            if cli.no_input {
                let output = cmd.execute(&partial.into_params()).await?;
                println!("{}", output);
            } else {
                let stdin = io::stdin();
                let mut prompter = Prompter::new(stdin.lock(), io::stdout());

                // Re-run until the user declines; values given on the command
                // line carry over, the rest are asked again per search.
                loop {
                    let params = prompter.resolve(partial.clone())?;
                    let output = cmd.execute(&params).await?;
                    println!("{}", output);

                    if !prompter.ask_continue()? {
                        println!("Goodbye!");
                        break;
                    }
                }
            }
        }

        Commands::Markets => {
            println!("Supported eBay marketplaces:\n");
            println!("{:<6} {:<20} {:<10}", "Code", "Domain", "Currency");
            println!("{:-<6} {:-<20} {:-<10}", "", "", "");

            for market in Marketplace::all() {
                println!(
                    "{:<6} {:<20} {:<10}",
                    market.to_string(),
                    market.domain(),
                    market.currency()
                );
            }
        }
    }

    Ok(())
}
