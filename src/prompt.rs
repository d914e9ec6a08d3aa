//! Interactive fallback for missing search parameters.
//!
//! The core pipeline only ever sees a fully-populated [`SearchParams`];
//! this module merges CLI-provided values with config defaults and, when
//! running interactively, prompts for whatever is still missing.

use crate::config::Config;
use crate::ebay::models::{Condition, SearchParams};
use std::io::{self, BufRead, Write};

/// Search parameters as collected from the CLI, before resolution. `None`
/// means the user did not supply the value.
#[derive(Debug, Clone, Default)]
pub struct PartialParams {
    pub keywords: Vec<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub condition: Option<Condition>,
    pub pages: Option<u32>,
}

impl PartialParams {
    /// Fills unset fields from config defaults. CLI values win.
    pub fn with_config_defaults(mut self, config: &Config) -> Self {
        if self.condition.is_none() {
            self.condition = config.condition;
        }
        if self.min_price.is_none() {
            self.min_price = config.min_price.clone();
        }
        if self.max_price.is_none() {
            self.max_price = config.max_price.clone();
        }
        if self.pages.is_none() {
            self.pages = Some(config.pages);
        }
        self
    }

    /// Resolves without prompting; anything still unset takes its default.
    pub fn into_params(self) -> SearchParams {
        SearchParams {
            keywords: self.keywords,
            min_price: self.min_price,
            max_price: self.max_price,
            condition: self.condition,
            pages: self.pages.unwrap_or(1),
        }
    }
}

/// Question/answer loop over arbitrary reader/writer pairs, so resolution
/// is testable without a terminal.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Prompts for every field still missing and returns the populated
    /// parameters.
    pub fn resolve(&mut self, partial: PartialParams) -> io::Result<SearchParams> {
        let mut params = partial;

        if params.keywords.is_empty() {
            let answer = self.ask("Enter keywords (separated by spaces): ")?;
            params.keywords = answer.split_whitespace().map(String::from).collect();
        }

        if params.condition.is_none() {
            let answer =
                self.ask("Enter the item condition (new, used, refurbished, or any) [any]: ")?;
            params.condition = Some(Condition::parse_lenient(&answer));
        }

        if params.min_price.is_none() {
            let answer = self.ask("Enter the minimum price (optional): ")?;
            params.min_price = if answer.is_empty() { None } else { Some(answer) };
        }

        if params.max_price.is_none() {
            let answer = self.ask("Enter the maximum price (optional): ")?;
            params.max_price = if answer.is_empty() { None } else { Some(answer) };
        }

        if params.pages.is_none() {
            let answer = self.ask("Enter the number of pages to search (default 1): ")?;
            params.pages = Some(answer.parse().unwrap_or(1));
        }

        Ok(params.into_params())
    }

    /// Asks whether to run another search.
    pub fn ask_continue(&mut self) -> io::Result<bool> {
        let answer = self.ask("\nWould you like to start another search? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
