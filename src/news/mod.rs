//! News provider clients and the primary/fallback fetch chain
//!
//! Providers are behind the [`NewsProvider`] trait so the analysis workflow
//! and the tests never care which upstream produced the articles. The
//! concrete clients talk to NewsAPI (primary) and GNews (fallback); both
//! accept a base-URL override for mock-server testing.

pub mod fetcher;
pub mod gnews;
pub mod newsapi;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::models::Article;

pub use fetcher::NewsFetcher;
pub use gnews::GnewsClient;
pub use newsapi::NewsApiClient;

/// Default lookback window, in days, when no `from` date is given
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// Errors raised by a single news provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider requires an API key that is not configured
    #[error("{0}: API key is not configured")]
    MissingApiKey(&'static str),

    /// Upstream returned a non-success HTTP status
    #[error("{provider}: upstream returned status {status}")]
    Status { provider: &'static str, status: u16 },

    /// The provider rejected the request with an error payload
    #[error("{provider}: request rejected: {message}")]
    Rejected {
        provider: &'static str,
        message: String,
    },

    /// Transport-level failure
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the provider's documented shape
    #[error("{provider}: malformed response: {detail}")]
    Malformed {
        provider: &'static str,
        detail: String,
    },
}

/// A resolved news search request with explicit, defaulted date bounds
///
/// `date_from` defaults to 7 days before now and `date_to` to now when the
/// caller leaves them unset; there is no implicit defaulting further down.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsQuery {
    pub query: String,

    /// Comma-separated provider source ids, unrestricted when `None`
    pub sources: Option<String>,

    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

impl NewsQuery {
    /// Build a query, applying the documented date defaults
    pub fn new(
        query: impl Into<String>,
        sources: Option<String>,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            query: query.into(),
            sources,
            date_from: date_from.unwrap_or(now - Duration::days(DEFAULT_LOOKBACK_DAYS)),
            date_to: date_to.unwrap_or(now),
        }
    }

    /// Format a bound the way both upstream APIs expect (`YYYY-MM-DD`)
    pub fn format_date(date: &DateTime<Utc>) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// A source of news articles for a search query
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Short provider identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Fetch articles matching the query, newest first
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_defaults_applied() {
        let before = Utc::now();
        let query = NewsQuery::new("markets", None, None, None);
        let after = Utc::now();

        assert!(query.date_to >= before && query.date_to <= after);
        let lookback = query.date_to - query.date_from;
        assert_eq!(lookback.num_days(), DEFAULT_LOOKBACK_DAYS);
    }

    #[test]
    fn test_explicit_dates_win_over_defaults() {
        let from = Utc::now() - Duration::days(30);
        let to = Utc::now() - Duration::days(1);
        let query = NewsQuery::new("markets", None, Some(from), Some(to));

        assert_eq!(query.date_from, from);
        assert_eq!(query.date_to, to);
    }

    #[test]
    fn test_date_formatting() {
        let date = DateTime::parse_from_rfc3339("2026-08-15T13:45:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(NewsQuery::format_date(&date), "2026-08-15");
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Status {
            provider: "newsapi",
            status: 429,
        };
        assert!(err.to_string().contains("429"));

        let err = ProviderError::MissingApiKey("gnews");
        assert!(err.to_string().contains("gnews"));
    }
}
