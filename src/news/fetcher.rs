//! Primary/fallback provider chain
//!
//! The fetcher tries the primary provider first and falls back to the
//! secondary on any failure, synchronously within the same request. There is
//! no retry loop beyond the single fallback attempt; when both providers
//! fail the combined error carries both causes.

use crate::error::{Error, Result};
use crate::models::Article;

use super::{NewsProvider, NewsQuery};

/// Two-provider fetch chain
pub struct NewsFetcher {
    primary: Box<dyn NewsProvider>,
    fallback: Box<dyn NewsProvider>,
}

impl NewsFetcher {
    pub fn new(primary: Box<dyn NewsProvider>, fallback: Box<dyn NewsProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Fetch articles, attempting the primary provider first
    ///
    /// A fallback attempt is logged at warn level so provider degradation is
    /// visible without failing the request.
    pub async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let primary_err = match self.primary.fetch(query).await {
            Ok(articles) => return Ok(articles),
            Err(e) => e,
        };

        tracing::warn!(
            provider = self.primary.name(),
            error = %primary_err,
            "primary news provider failed, trying fallback"
        );

        match self.fallback.fetch(query).await {
            Ok(articles) => Ok(articles),
            Err(fallback_err) => {
                tracing::error!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    primary_error = %primary_err,
                    fallback_error = %fallback_err,
                    "all news providers failed"
                );
                Err(Error::AllProvidersFailed {
                    primary: primary_err.to_string(),
                    fallback: fallback_err.to_string(),
                })
            }
        }
    }
}
