//! Corpus-level sentiment aggregation

use crate::error::{Error, Result};
use crate::models::{AggregateScores, AnalyzedArticle, SentimentLabel};
use crate::sentiment::scorer::classify;

/// Combine per-article sentiment into corpus-level statistics
///
/// `averageScore` is the mean of per-article scores; the three percentages
/// are bucket counts over the total, classified with the shared thresholds.
/// An empty batch is an explicit error rather than a NaN-producing division;
/// the analyze workflow rejects empty fetch results before reaching here.
pub fn aggregate(articles: &[AnalyzedArticle]) -> Result<AggregateScores> {
    if articles.is_empty() {
        return Err(Error::EmptyAggregate);
    }

    let total = articles.len() as f64;
    let mut sum = 0.0;
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;

    for article in articles {
        let score = article.sentiment.score;
        sum += score;

        match classify(score) {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
    }

    Ok(AggregateScores {
        average_score: sum / total,
        positive_percentage: positive as f64 / total * 100.0,
        neutral_percentage: neutral as f64 / total * 100.0,
        negative_percentage: negative as f64 / total * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Sentiment};
    use chrono::Utc;
    use proptest::prelude::*;

    fn analyzed(title: &str, score: f64) -> AnalyzedArticle {
        AnalyzedArticle {
            article: Article {
                title: title.to_string(),
                description: None,
                content: None,
                url: format!("https://example.com/{}", title.replace(' ', "-")),
                source: "Example".to_string(),
                published_at: Utc::now(),
            },
            sentiment: Sentiment {
                score,
                label: classify(score),
                keywords: vec![],
            },
        }
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let result = aggregate(&[]);
        assert!(matches!(result, Err(Error::EmptyAggregate)));
    }

    #[test]
    fn test_three_way_example() {
        let articles = vec![
            analyzed("Economy booms amid recovery", 0.6),
            analyzed("Markets crash", -0.7),
            analyzed("Report released", 0.0),
        ];

        let scores = aggregate(&articles).unwrap();
        assert!((scores.average_score - (-0.1 / 3.0)).abs() < 1e-9);
        assert!((scores.positive_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((scores.negative_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((scores.neutral_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_scores_count_as_neutral() {
        let articles = vec![analyzed("a", 0.05), analyzed("b", -0.05)];
        let scores = aggregate(&articles).unwrap();
        assert_eq!(scores.neutral_percentage, 100.0);
        assert_eq!(scores.positive_percentage, 0.0);
        assert_eq!(scores.negative_percentage, 0.0);
    }

    #[test]
    fn test_single_article() {
        let scores = aggregate(&[analyzed("solo", 0.4)]).unwrap();
        assert_eq!(scores.average_score, 0.4);
        assert_eq!(scores.positive_percentage, 100.0);
    }

    proptest! {
        #[test]
        fn prop_percentages_sum_to_100(scores in proptest::collection::vec(-1.0f64..1.0, 1..40)) {
            let articles: Vec<AnalyzedArticle> = scores
                .iter()
                .enumerate()
                .map(|(i, s)| analyzed(&format!("article-{i}"), *s))
                .collect();

            let agg = aggregate(&articles).unwrap();
            let sum = agg.positive_percentage + agg.neutral_percentage + agg.negative_percentage;
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }
}
