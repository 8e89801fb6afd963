//! NewsAPI client (primary provider)
//!
//! Talks to the newsapi.org `everything` endpoint:
//! <https://newsapi.org/docs/endpoints/everything>

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::Article;

use super::{NewsProvider, NewsQuery, ProviderError};

const PROVIDER_NAME: &str = "newsapi";
const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Articles requested per query
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    source: NewsApiSource,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: String,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: String,
}

/// Client for the primary news provider
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
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

    fn map_article(raw: NewsApiArticle) -> Article {
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
impl NewsProvider for NewsApiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey(PROVIDER_NAME));
        }

        let url = format!("{}/everything", self.base_url);
        let page_size = PAGE_SIZE.to_string();
        let from = NewsQuery::format_date(&query.date_from);
        let to = NewsQuery::format_date(&query.date_to);

        let mut params: Vec<(&str, &str)> = vec![
            ("q", query.query.as_str()),
            ("apiKey", self.api_key.as_str()),
            ("language", "en"),
            ("sortBy", "publishedAt"),
            ("pageSize", page_size.as_str()),
            ("from", from.as_str()),
            ("to", to.as_str()),
        ];
        if let Some(sources) = &query.sources {
            params.push(("sources", sources.as_str()));
        }

        tracing::debug!(query = %query.query, from = %from, to = %to, "fetching from NewsAPI");

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        let body: NewsApiResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::Malformed {
                    provider: PROVIDER_NAME,
                    detail: e.to_string(),
                })?;

        if body.status != "ok" {
            return Err(ProviderError::Rejected {
                provider: PROVIDER_NAME,
                message: body.message.unwrap_or_else(|| body.status.clone()),
            });
        }

        Ok(body.articles.into_iter().map(Self::map_article).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": "example", "name": "Example News"},
                "author": "A. Writer",
                "title": "Economy booms",
                "description": "A good quarter",
                "url": "https://example.com/booms",
                "urlToImage": null,
                "publishedAt": "2026-08-20T10:00:00Z",
                "content": "Full text"
            }]
        }"#;

        let parsed: NewsApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "ok");
        assert_eq!(parsed.articles.len(), 1);

        let article = NewsApiClient::map_article(parsed.articles.into_iter().next().unwrap());
        assert_eq!(article.title, "Economy booms");
        assert_eq!(article.source, "Example News");
        assert_eq!(article.content.as_deref(), Some("Full text"));
    }

    #[test]
    fn test_error_payload_deserialization() {
        let json = r#"{"status": "error", "code": "rateLimited", "message": "too many requests"}"#;
        let parsed: NewsApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "error");
        assert!(parsed.articles.is_empty());
        assert_eq!(parsed.message.as_deref(), Some("too many requests"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = NewsApiClient::new("", Duration::from_secs(5)).unwrap();
        let query = NewsQuery::new("markets", None, None, None);

        let err = client.fetch(&query).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey("newsapi")));
    }
}
