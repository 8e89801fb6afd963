//! newspulse - News Sentiment Analysis Service
//!
//! Fetches news articles for a search query, scores each article's sentiment
//! with a fixed lexicon, aggregates the scores and persists the result as an
//! immutable analysis record. Trending topics are derived on demand from
//! recent records.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`models`] - Core data structures and the JSON wire shapes
//! - [`sentiment`] - The scoring pipeline: tokenizer, lexicon, classifier,
//!   keyword extraction, aggregation and trending
//! - [`news`] - Provider clients and the primary/fallback fetch chain
//! - [`storage`] - Analysis record persistence (SQLite, mock)
//! - [`service`] - The analyze/history/trending workflows
//! - [`server`] - HTTP API
//!
//! # Example
//!
//! ```no_run
//! use newspulse::config::Config;
//! use newspulse::server::ApiServer;
//! use newspulse::storage::create_sqlite_repository;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let repository = create_sqlite_repository(&config.database.sqlite_path)?;
//!     let server = ApiServer::new(config, repository)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod news;
pub mod sentiment;
pub mod server;
pub mod service;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{
        AggregateScores, AnalysisRecord, AnalysisSummary, AnalyzedArticle, Article, Sentiment,
        SentimentLabel, TrendingTopic,
    };
    pub use crate::news::{NewsFetcher, NewsProvider, NewsQuery};
    pub use crate::sentiment::Lexicon;
    pub use crate::service::{AnalysisService, AnalyzeRequest};
    pub use crate::storage::{AnalysisRepository, HistoryFilter};
}

// Direct re-exports for convenience
pub use models::{AnalysisRecord, AnalyzedArticle, Article, SentimentLabel, TrendingTopic};
