//! Unified error handling for the newspulse crate
//!
//! A single [`Error`] enum wraps the domain-specific failures, and
//! [`ErrorCategory`] classifies them for the HTTP layer (status mapping) and
//! for logging. Failures are surfaced to the caller with a distinguishable
//! category; nothing is silently swallowed.

use std::io;
use thiserror::Error;

pub use crate::news::ProviderError;

/// Classification of errors for reporting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request itself was invalid (missing query, bad dates)
    BadInput,
    /// The query produced no result (empty fetch)
    NotFound,
    /// External news providers are unavailable
    Upstream,
    /// Scoring, aggregation, persistence or other internal failures
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadInput => "bad_input",
            Self::NotFound => "not_found",
            Self::Upstream => "upstream_unavailable",
            Self::Internal => "internal",
        }
    }
}

/// Unified error type for the newspulse crate
#[derive(Error, Debug)]
pub enum Error {
    /// Request validation failures, reported before any fetch attempt
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Distinct "not found" outcome: the fetch succeeded but was empty
    #[error("no news articles found for query: {query}")]
    NoArticles { query: String },

    /// Both the primary and the fallback provider failed
    #[error("all news sources exhausted (primary: {primary}, fallback: {fallback})")]
    AllProvidersFailed { primary: String, fallback: String },

    /// Single-provider failure
    #[error("news provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Aggregation was invoked on an empty article batch
    #[error("cannot aggregate an empty set of analyzed articles")]
    EmptyAggregate,

    /// Database errors
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an input validation error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Get the error category for reporting strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) => ErrorCategory::BadInput,
            Self::NoArticles { .. } => ErrorCategory::NotFound,
            Self::AllProvidersFailed { .. } | Self::Provider(_) => ErrorCategory::Upstream,
            Self::EmptyAggregate
            | Self::Database(_)
            | Self::Json(_)
            | Self::Http(_)
            | Self::Io(_)
            | Self::Config(_)
            | Self::Other { .. } => ErrorCategory::Internal,
        }
    }
}

// Conversion from rusqlite::Error
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err)
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
