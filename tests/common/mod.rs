//! Common test utilities

use chrono::{DateTime, Utc};
use serde_json::json;

use newspulse::models::{
    AggregateScores, AnalysisRecord, DateRange, Keyword, Sentiment, SentimentLabel, StoredArticle,
};

/// NewsAPI-shaped response body with one article per (title, description) pair
#[allow(dead_code)]
pub fn newsapi_body(articles: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": articles.len(),
        "articles": articles.iter().map(|(title, description)| json!({
            "source": {"id": null, "name": "Example News"},
            "author": "A. Writer",
            "title": title,
            "description": description,
            "url": format!("https://example.com/{}", title.replace(' ', "-")),
            "urlToImage": null,
            "publishedAt": "2026-08-20T10:00:00Z",
            "content": null
        })).collect::<Vec<_>>()
    })
}

/// GNews-shaped response body
#[allow(dead_code)]
pub fn gnews_body(articles: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "totalArticles": articles.len(),
        "articles": articles.iter().map(|(title, description)| json!({
            "title": title,
            "description": description,
            "content": null,
            "url": format!("https://example.com/{}", title.replace(' ', "-")),
            "image": null,
            "publishedAt": "2026-08-19T08:30:00Z",
            "source": {"name": "Example Wire", "url": "https://example.com"}
        })).collect::<Vec<_>>()
    })
}

/// Build a stored analysis record with one positive article
#[allow(dead_code)]
pub fn sample_record(id: &str, query: &str, created_at: DateTime<Utc>) -> AnalysisRecord {
    AnalysisRecord {
        id: id.to_string(),
        query: query.to_string(),
        sources: "all".to_string(),
        date_range: DateRange {
            from: created_at - chrono::Duration::days(7),
            to: created_at,
        },
        articles: vec![StoredArticle {
            title: "Economy booms".to_string(),
            source: "Example News".to_string(),
            url: "https://example.com/booms".to_string(),
            published_at: created_at,
            sentiment: Sentiment {
                score: 0.3,
                label: SentimentLabel::Positive,
                keywords: vec![Keyword {
                    word: "booms".to_string(),
                    score: 0.4,
                }],
            },
        }],
        aggregate_scores: AggregateScores {
            average_score: 0.3,
            positive_percentage: 100.0,
            neutral_percentage: 0.0,
            negative_percentage: 0.0,
        },
        created_at,
    }
}
