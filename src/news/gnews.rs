//! GNews client (fallback provider)
//!
//! Talks to the gnews.io search endpoint:
//! <https://gnews.io/docs/v4#search-endpoint>

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::Article;

use super::{NewsProvider, NewsQuery, ProviderError};

const PROVIDER_NAME: &str = "gnews";
const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Articles requested per query (the free tier is capped lower than NewsAPI)
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
struct GnewsResponse {
    #[serde(default)]
    articles: Vec<GnewsArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GnewsArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: String,
    published_at: DateTime<Utc>,
    source: GnewsSource,
}

#[derive(Debug, Deserialize)]
struct GnewsSource {
    name: String,
}

/// Client for the fallback news provider
pub struct GnewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GnewsClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, timeout)
    }

    /// Create a client against a custom base URL (mock servers in tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn map_article(raw: GnewsArticle) -> Article {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            content: raw.content,
            url: raw.url,
            source: raw.source.name,
            published_at: raw.published_at,
        }
    }
}

#[async_trait]
impl NewsProvider for GnewsClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey(PROVIDER_NAME));
        }

        let url = format!("{}/search", self.base_url);
        let max = MAX_RESULTS.to_string();
        let from = NewsQuery::format_date(&query.date_from);
        let to = NewsQuery::format_date(&query.date_to);

        let params: Vec<(&str, &str)> = vec![
            ("q", query.query.as_str()),
            ("token", self.api_key.as_str()),
            ("lang", "en"),
            ("max", max.as_str()),
            ("from", from.as_str()),
            ("to", to.as_str()),
        ];

        tracing::debug!(query = %query.query, from = %from, to = %to, "fetching from GNews");

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        let body: GnewsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed {
                provider: PROVIDER_NAME,
                detail: e.to_string(),
            })?;

        Ok(body.articles.into_iter().map(Self::map_article).collect())
    }
}
