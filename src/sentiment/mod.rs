//! Sentiment scoring pipeline
//!
//! The algorithmic core of the crate: tokenize article text, look up
//! per-token weights in an immutable lexicon, classify the averaged score,
//! extract emotional keywords, and derive corpus-level aggregates and
//! trending topics. Everything here is a pure function over its inputs; the
//! lexicon is injected explicitly.

pub mod aggregate;
pub mod lexicon;
pub mod scorer;
pub mod tokenizer;
pub mod trending;

pub use aggregate::aggregate;
pub use lexicon::Lexicon;
pub use scorer::{
    analyze_article, analyze_articles, classify, extract_keywords, score_tokens,
    KEYWORD_THRESHOLD, MAX_KEYWORDS, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use tokenizer::tokenize;
pub use trending::{query_keywords, trending_topics, MAX_TRENDING_TOPICS, TRENDING_WINDOW_DAYS};
