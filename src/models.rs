//! Core data structures shared across the crate
//!
//! All wire-facing types serialize with camelCase field names, matching the
//! JSON shape consumed by API clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as returned by a provider. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    pub url: String,

    /// Flattened provider source name
    pub source: String,

    pub published_at: DateTime<Utc>,
}

impl Article {
    /// Combined text used for sentiment scoring: title, description and
    /// content joined with spaces, missing fields treated as empty.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.content.as_deref().unwrap_or("")
        )
    }
}

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An emotionally charged word and its individual lexicon score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub score: f64,
}

/// Sentiment derived for a single article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Normalized score, roughly in [-1, 1]
    pub score: f64,

    pub label: SentimentLabel,

    /// Top emotional keywords, strongest first
    pub keywords: Vec<Keyword>,
}

/// An article together with its derived sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(flatten)]
    pub article: Article,

    pub sentiment: Sentiment,
}

/// Corpus-level sentiment statistics over a non-empty article batch
///
/// Percentages are computed over article counts (not score-weighted) and sum
/// to 100 within floating tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateScores {
    pub average_score: f64,
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
}

/// Inclusive date range an analysis covered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Trimmed per-article projection persisted inside an [`AnalysisRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArticle {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub sentiment: Sentiment,
}

impl From<&AnalyzedArticle> for StoredArticle {
    fn from(analyzed: &AnalyzedArticle) -> Self {
        Self {
            title: analyzed.article.title.clone(),
            source: analyzed.article.source.clone(),
            url: analyzed.article.url.clone(),
            published_at: analyzed.article.published_at,
            sentiment: analyzed.sentiment.clone(),
        }
    }
}

/// Persisted result of one analyze request. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub query: String,

    /// Comma-separated provider source ids, or "all" when unrestricted
    pub sources: String,

    pub date_range: DateRange,
    pub articles: Vec<StoredArticle>,
    pub aggregate_scores: AggregateScores,
    pub created_at: DateTime<Utc>,
}

/// Partial record returned by history listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub query: String,
    pub sources: String,
    pub date_range: DateRange,
    pub aggregate_scores: AggregateScores,
    pub created_at: DateTime<Utc>,
}

impl From<&AnalysisRecord> for AnalysisSummary {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id.clone(),
            query: record.query.clone(),
            sources: record.sources.clone(),
            date_range: record.date_range.clone(),
            aggregate_scores: record.aggregate_scores.clone(),
            created_at: record.created_at,
        }
    }
}

/// Frequency-weighted keyword trend derived from recent analyses.
/// Ephemeral: recomputed on each request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub keyword: String,
    pub count: usize,
    pub average_sentiment: f64,
}
