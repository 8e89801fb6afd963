//! Trending topic extraction from recent analysis records
//!
//! Trends are derived from the queries of records created within the
//! trailing window, weighted by how often a keyword appears across records
//! and by each record's own average article sentiment. The output is
//! ephemeral: recomputed on every request, never persisted.

use std::collections::HashMap;

use crate::models::{AnalysisRecord, TrendingTopic};

/// Trailing window, in days, a record must fall into to influence trends
pub const TRENDING_WINDOW_DAYS: i64 = 7;

/// Maximum number of topics returned
pub const MAX_TRENDING_TOPICS: usize = 10;

/// Minimum keyword length; shorter query tokens are discarded
pub const MIN_KEYWORD_LEN: usize = 3;

/// Common words excluded from query keywords
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
];

/// Extract keywords from a search query
///
/// Lowercases, splits on whitespace, drops stop-words and tokens shorter
/// than [`MIN_KEYWORD_LEN`], and deduplicates so each keyword appears once
/// per query. Order of first occurrence is preserved.
pub fn query_keywords(query: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for word in query.to_lowercase().split_whitespace() {
        if word.len() < MIN_KEYWORD_LEN || STOP_WORDS.contains(&word) {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }

    keywords
}

/// Mean article sentiment of a record, 0 when it holds no articles
fn record_average_sentiment(record: &AnalysisRecord) -> f64 {
    if record.articles.is_empty() {
        return 0.0;
    }

    let sum: f64 = record
        .articles
        .iter()
        .map(|article| article.sentiment.score)
        .sum();
    sum / record.articles.len() as f64
}

/// Derive trending topics from a set of recent analysis records
///
/// For each keyword surviving [`query_keywords`], `count` is the number of
/// records mentioning it and `averageSentiment` is the mean of those
/// records' own average article sentiment. Sorted descending by count
/// (keyword ascending as a deterministic tie-break) and capped at
/// [`MAX_TRENDING_TOPICS`].
pub fn trending_topics(records: &[AnalysisRecord]) -> Vec<TrendingTopic> {
    let mut accumulated: HashMap<String, (usize, f64)> = HashMap::new();

    for record in records {
        let sentiment = record_average_sentiment(record);

        for keyword in query_keywords(&record.query) {
            let entry = accumulated.entry(keyword).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += sentiment;
        }
    }

    let mut topics: Vec<TrendingTopic> = accumulated
        .into_iter()
        .map(|(keyword, (count, sentiment_sum))| TrendingTopic {
            keyword,
            count,
            average_sentiment: sentiment_sum / count as f64,
        })
        .collect();

    topics.sort_by(|a, b| b.count.cmp(&a.count).then(a.keyword.cmp(&b.keyword)));
    topics.truncate(MAX_TRENDING_TOPICS);
    topics
}
