//! eBay regional sites and currency configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported eBay marketplaces with their domains and currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Us,
    #[default]
    Uk,
    De,
    Fr,
    Es,
    It,
    Ca,
    Au,
}

impl Marketplace {
    /// Returns the eBay domain for this marketplace.
    pub fn domain(&self) -> &'static str {
        match self {
            Marketplace::Us => "ebay.com",
            Marketplace::Uk => "ebay.co.uk",
            Marketplace::De => "ebay.de",
            Marketplace::Fr => "ebay.fr",
            Marketplace::Es => "ebay.es",
            Marketplace::It => "ebay.it",
            Marketplace::Ca => "ebay.ca",
            Marketplace::Au => "ebay.com.au",
        }
    }

    /// Returns the search endpoint for this marketplace.
    pub fn search_url(&self) -> String {
        format!("https://www.{}/sch/i.html", self.domain())
    }

    /// Returns the currency code for this marketplace.
    pub fn currency(&self) -> &'static str {
        match self {
            Marketplace::Us => "USD",
            Marketplace::Uk => "GBP",
            Marketplace::De | Marketplace::Fr | Marketplace::Es | Marketplace::It => "EUR",
            Marketplace::Ca => "CAD",
            Marketplace::Au => "AUD",
        }
    }

    /// Returns the currency symbol used when presenting prices.
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Marketplace::Us | Marketplace::Ca | Marketplace::Au => "$",
            Marketplace::Uk => "£",
            Marketplace::De | Marketplace::Fr | Marketplace::Es | Marketplace::It => "€",
        }
    }

    /// Returns the Accept-Language header value for this marketplace.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Marketplace::Us | Marketplace::Ca | Marketplace::Au => "en-US,en;q=0.9",
            Marketplace::Uk => "en-GB,en;q=0.9",
            Marketplace::De => "de-DE,de;q=0.9,en;q=0.8",
            Marketplace::Fr => "fr-FR,fr;q=0.9,en;q=0.8",
            Marketplace::Es => "es-ES,es;q=0.9,en;q=0.8",
            Marketplace::It => "it-IT,it;q=0.9,en;q=0.8",
        }
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [Marketplace] {
        &[
            Marketplace::Us,
            Marketplace::Uk,
            Marketplace::De,
            Marketplace::Fr,
            Marketplace::Es,
            Marketplace::It,
            Marketplace::Ca,
            Marketplace::Au,
        ]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Marketplace::Us => "us",
            Marketplace::Uk => "uk",
            Marketplace::De => "de",
            Marketplace::Fr => "fr",
            Marketplace::Es => "es",
            Marketplace::It => "it",
            Marketplace::Ca => "ca",
            Marketplace::Au => "au",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Marketplace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" => Ok(Marketplace::Us),
            "uk" | "gb" => Ok(Marketplace::Uk),
            "de" => Ok(Marketplace::De),
            "fr" => Ok(Marketplace::Fr),
            "es" => Ok(Marketplace::Es),
            "it" => Ok(Marketplace::It),
            "ca" => Ok(Marketplace::Ca),
            "au" => Ok(Marketplace::Au),
            _ => Err(format!("Unknown marketplace: {}. Use one of: us, uk, de, fr, es, it, ca, au", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marketplace() {
        assert_eq!(Marketplace::default(), Marketplace::Uk);
    }

    #[test]
    fn test_domains() {
        assert_eq!(Marketplace::Us.domain(), "ebay.com");
        assert_eq!(Marketplace::Uk.domain(), "ebay.co.uk");
        assert_eq!(Marketplace::Au.domain(), "ebay.com.au");
    }

    #[test]
    fn test_search_url() {
        assert_eq!(Marketplace::Uk.search_url(), "https://www.ebay.co.uk/sch/i.html");
        assert_eq!(Marketplace::Us.search_url(), "https://www.ebay.com/sch/i.html");
    }

    #[test]
    fn test_currency() {
        assert_eq!(Marketplace::Uk.currency(), "GBP");
        assert_eq!(Marketplace::Uk.currency_symbol(), "£");
        assert_eq!(Marketplace::De.currency(), "EUR");
        assert_eq!(Marketplace::Us.currency_symbol(), "$");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("uk".parse::<Marketplace>().unwrap(), Marketplace::Uk);
        assert_eq!("UK".parse::<Marketplace>().unwrap(), Marketplace::Uk);
        assert_eq!("gb".parse::<Marketplace>().unwrap(), Marketplace::Uk);
        assert_eq!("us".parse::<Marketplace>().unwrap(), Marketplace::Us);
        assert!("mars".parse::<Marketplace>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for market in Marketplace::all() {
            let code = market.to_string();
            assert_eq!(code.parse::<Marketplace>().unwrap(), *market);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Marketplace::Uk).unwrap();
        assert_eq!(json, "\"uk\"");
        let parsed: Marketplace = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(parsed, Marketplace::De);
    }
}
