//! Lexicon scoring, classification and keyword extraction
//!
//! The scorer is a pure-function pipeline over word tokens:
//!
//! 1. [`score_tokens`] averages normalized lexicon weights over all tokens
//!    (unmatched tokens count as zero).
//! 2. [`classify`] maps a score to a three-way label using the shared
//!    threshold constants.
//! 3. [`extract_keywords`] re-scores each token individually and keeps the
//!    strongest emotional words.
//!
//! The same [`score_tokens`] function scores a full article's token list and
//! a single-token slice; keyword extraction relies on that symmetry.

use crate::models::{AnalyzedArticle, Article, Keyword, Sentiment, SentimentLabel};
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::tokenizer::tokenize;

/// Scores strictly above this are classified positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores strictly below this are classified negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Minimum absolute per-token score for a word to qualify as a keyword
pub const KEYWORD_THRESHOLD: f64 = 0.3;

/// Maximum number of keywords attached to an article
pub const MAX_KEYWORDS: usize = 5;

/// Mean normalized lexicon weight over all tokens
///
/// Unmatched tokens contribute zero to the sum but still count toward the
/// denominator. An empty token list scores 0.0.
pub fn score_tokens(lexicon: &Lexicon, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let sum: f64 = tokens
        .iter()
        .filter_map(|token| lexicon.weight(token))
        .sum();

    sum / tokens.len() as f64
}

/// Map a score to its sentiment label
///
/// The comparisons are strict: exactly 0.05 or -0.05 is neutral. These
/// thresholds are applied identically at article, aggregate, keyword and
/// trending level.
pub fn classify(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Extract the strongest emotional keywords from a token list
///
/// Each token is scored individually through the same lexicon; tokens with
/// `|score| > KEYWORD_THRESHOLD` survive. Repeated words are deduplicated,
/// keeping the highest-magnitude occurrence. The result is sorted descending
/// by absolute score and capped at [`MAX_KEYWORDS`].
pub fn extract_keywords(lexicon: &Lexicon, tokens: &[String]) -> Vec<Keyword> {
    let mut scored: Vec<Keyword> = Vec::new();

    for token in tokens {
        let score = score_tokens(lexicon, std::slice::from_ref(token));
        if score.abs() <= KEYWORD_THRESHOLD {
            continue;
        }

        match scored.iter_mut().find(|k| k.word == *token) {
            Some(existing) => {
                if score.abs() > existing.score.abs() {
                    existing.score = score;
                }
            }
            None => scored.push(Keyword {
                word: token.clone(),
                score,
            }),
        }
    }

    scored.sort_by(|a, b| {
        b.score
            .abs()
            .partial_cmp(&a.score.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(MAX_KEYWORDS);
    scored
}

/// Derive the full sentiment for one article
pub fn analyze_article(lexicon: &Lexicon, article: &Article) -> Sentiment {
    let tokens = tokenize(&article.combined_text());
    let score = score_tokens(lexicon, &tokens);

    Sentiment {
        score,
        label: classify(score),
        keywords: extract_keywords(lexicon, &tokens),
    }
}

/// Score a batch of articles, preserving fetch order
///
/// Per-article scoring is independent; no article's result depends on
/// another.
pub fn analyze_articles(lexicon: &Lexicon, articles: Vec<Article>) -> Vec<AnalyzedArticle> {
    articles
        .into_iter()
        .map(|article| {
            let sentiment = analyze_article(lexicon, &article);
            AnalyzedArticle { article, sentiment }
        })
        .collect()
}
