//! Analysis workflow orchestration
//!
//! [`AnalysisService`] ties the pipeline together: validate the request,
//! fetch articles through the provider chain, score them in fetch order,
//! aggregate, persist an immutable record and return the result. Scoring a
//! batch has no cross-article dependencies, so failures are all-or-nothing:
//! no partial analysis is ever returned.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    AggregateScores, AnalysisRecord, AnalysisSummary, AnalyzedArticle, DateRange, StoredArticle,
    TrendingTopic,
};
use crate::news::{NewsFetcher, NewsQuery};
use crate::sentiment::{aggregate, analyze_articles, trending_topics, Lexicon, TRENDING_WINDOW_DAYS};
use crate::storage::{HistoryFilter, SharedAnalysisRepository, DEFAULT_HISTORY_LIMIT};

/// Incoming analyze request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub sources: Option<String>,

    #[serde(default)]
    pub date_from: Option<DateTime<Utc>>,

    #[serde(default)]
    pub date_to: Option<DateTime<Utc>>,
}

/// Result of one analyze request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub articles: Vec<AnalyzedArticle>,
    pub aggregate_scores: AggregateScores,
    pub id: String,
}

/// The analysis service: lexicon + provider chain + repository
pub struct AnalysisService {
    lexicon: Arc<Lexicon>,
    fetcher: NewsFetcher,
    repository: SharedAnalysisRepository,
}

impl AnalysisService {
    pub fn new(
        lexicon: Arc<Lexicon>,
        fetcher: NewsFetcher,
        repository: SharedAnalysisRepository,
    ) -> Self {
        Self {
            lexicon,
            fetcher,
            repository,
        }
    }

    /// Run a full analysis: fetch, score, aggregate, persist
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResponse> {
        let query_text = request.query.trim();
        if query_text.is_empty() {
            return Err(Error::invalid_input("search query is required"));
        }

        let query = NewsQuery::new(
            query_text,
            request.sources.clone(),
            request.date_from,
            request.date_to,
        );

        let articles = self.fetcher.fetch(&query).await?;
        if articles.is_empty() {
            return Err(Error::NoArticles {
                query: query_text.to_string(),
            });
        }

        let analyzed = analyze_articles(&self.lexicon, articles);
        let aggregate_scores = aggregate(&analyzed)?;

        let record = AnalysisRecord {
            id: Uuid::new_v4().to_string(),
            query: query_text.to_string(),
            sources: request.sources.unwrap_or_else(|| "all".to_string()),
            date_range: DateRange {
                from: query.date_from,
                to: query.date_to,
            },
            articles: analyzed.iter().map(StoredArticle::from).collect(),
            aggregate_scores: aggregate_scores.clone(),
            created_at: Utc::now(),
        };

        self.repository.store(&record).await?;

        tracing::info!(
            id = %record.id,
            query = %record.query,
            articles = analyzed.len(),
            average_score = aggregate_scores.average_score,
            "analysis stored"
        );

        Ok(AnalysisResponse {
            articles: analyzed,
            aggregate_scores,
            id: record.id,
        })
    }

    /// List past analyses, optionally filtered by query substring
    pub async fn history(
        &self,
        query: Option<String>,
        limit: Option<usize>,
    ) -> Result<Vec<AnalysisSummary>> {
        let filter = HistoryFilter {
            query,
            ..Default::default()
        };
        self.repository
            .find(&filter, limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
            .await
    }

    /// Fetch one stored analysis by id
    pub async fn get_analysis(&self, id: &str) -> Result<Option<AnalysisRecord>> {
        self.repository.get_by_id(id).await
    }

    /// Trending topics over the trailing window, recomputed on each call
    pub async fn trending(&self) -> Result<Vec<TrendingTopic>> {
        let cutoff = Utc::now() - Duration::days(TRENDING_WINDOW_DAYS);
        let records = self.repository.find_created_since(cutoff).await?;
        Ok(trending_topics(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use crate::news::{NewsProvider, ProviderError};
    use crate::storage::{AnalysisRepository, MockAnalysisRepository};
    use async_trait::async_trait;

    struct FixedProvider {
        articles: Vec<Article>,
    }

    #[async_trait]
    impl NewsProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch(&self, _query: &NewsQuery) -> std::result::Result<Vec<Article>, ProviderError> {
            Ok(self.articles.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl NewsProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn fetch(&self, _query: &NewsQuery) -> std::result::Result<Vec<Article>, ProviderError> {
            Err(ProviderError::Rejected {
                provider: "failing",
                message: "down".to_string(),
            })
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: None,
            content: None,
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            source: "Example News".to_string(),
            published_at: Utc::now(),
        }
    }

    fn service_with(articles: Vec<Article>) -> (AnalysisService, Arc<MockAnalysisRepository>) {
        let repo = Arc::new(MockAnalysisRepository::new());
        let fetcher = NewsFetcher::new(
            Box::new(FixedProvider { articles }),
            Box::new(FailingProvider),
        );
        let service = AnalysisService::new(Arc::new(Lexicon::afinn()), fetcher, repo.clone());
        (service, repo)
    }

    fn request(query: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            query: query.to_string(),
            sources: None,
            date_from: None,
            date_to: None,
        }
    }

    #[tokio::test]
    async fn test_blank_query_rejected_before_fetch() {
        let (service, repo) = service_with(vec![article("anything")]);

        let err = service.analyze(request("   ")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_empty_fetch_is_not_found() {
        let (service, repo) = service_with(vec![]);

        let err = service.analyze(request("obscure")).await.unwrap_err();
        assert!(matches!(err, Error::NoArticles { .. }));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_persists_and_responds() {
        let (service, repo) = service_with(vec![
            article("Economy booms amid recovery"),
            article("Markets crash"),
        ]);

        let response = service.analyze(request("economy")).await.unwrap();
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].article.title, "Economy booms amid recovery");

        let stored = repo.get_by_id(&response.id).await.unwrap().unwrap();
        assert_eq!(stored.query, "economy");
        assert_eq!(stored.sources, "all");
        assert_eq!(stored.articles.len(), 2);
        assert_eq!(stored.aggregate_scores, response.aggregate_scores);
    }

    #[tokio::test]
    async fn test_history_defaults_limit() {
        let (service, _repo) = service_with(vec![article("good news")]);

        for _ in 0..12 {
            service.analyze(request("economy")).await.unwrap();
        }

        let summaries = service.history(None, None).await.unwrap();
        assert_eq!(summaries.len(), DEFAULT_HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn test_trending_reflects_recent_queries() {
        let (service, _repo) = service_with(vec![article("good news")]);

        service.analyze(request("the stock market crash")).await.unwrap();
        service.analyze(request("stock rally")).await.unwrap();

        let topics = service.trending().await.unwrap();
        let stock = topics.iter().find(|t| t.keyword == "stock").unwrap();
        assert_eq!(stock.count, 2);
        assert!(topics.iter().all(|t| t.keyword != "the"));
    }
}
