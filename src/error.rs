//! Error types shared across the search pipeline.

use thiserror::Error;

/// Errors surfaced by a search run. None of these are retried or swallowed
/// internally; the caller decides user-facing messaging.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed search parameters, detected before any network access.
    #[error("invalid search parameters: {0}")]
    Validation(String),

    /// A page could not be retrieved. Fatal for the whole search.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A matched listing's price text could not be normalized to a number.
    /// Indicates the result-page markup changed; aborting beats skewed stats.
    #[error("could not parse price text {text:?}")]
    Price { text: String },
}

impl Error {
    pub(crate) fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch { url: url.into(), reason: reason.to_string() }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation("keywords must not be empty".to_string());
        assert!(err.to_string().contains("invalid search parameters"));

        let err = Error::fetch("https://example.com", "status 503");
        assert!(err.to_string().contains("https://example.com"));
        assert!(err.to_string().contains("503"));

        let err = Error::Price { text: "12.34.56".to_string() };
        assert!(err.to_string().contains("12.34.56"));
    }
}
