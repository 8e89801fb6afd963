//! Persistence for analysis records
//!
//! The [`AnalysisRepository`] trait decouples the analysis workflow from the
//! storage backend: production uses SQLite, tests use the in-memory mock.
//! Records are append-only; nothing ever updates or deletes a stored
//! analysis.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::models::{
    AggregateScores, AnalysisRecord, AnalysisSummary, DateRange, StoredArticle,
};

/// Default number of summaries returned by history listings
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Filter for history listings
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive substring match on the record's query text
    pub query: Option<String>,

    /// Lower bound (inclusive) on `created_at`
    pub created_after: Option<DateTime<Utc>>,

    /// Upper bound (inclusive) on `created_at`
    pub created_before: Option<DateTime<Utc>>,
}

impl HistoryFilter {
    fn matches(&self, record: &AnalysisRecord) -> bool {
        if let Some(query) = &self.query {
            if !record
                .query
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        if let Some(after) = self.created_after {
            if record.created_at < after {
                return false;
            }
        }
        if let Some(before) = self.created_before {
            if record.created_at > before {
                return false;
            }
        }
        true
    }
}

/// Repository for analysis record operations
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Persist a new record (append-only)
    async fn store(&self, record: &AnalysisRecord) -> Result<()>;

    /// Fetch a full record by id
    async fn get_by_id(&self, id: &str) -> Result<Option<AnalysisRecord>>;

    /// List partial records matching the filter, most recent first
    async fn find(&self, filter: &HistoryFilter, limit: usize) -> Result<Vec<AnalysisSummary>>;

    /// Full records created at or after the cutoff (trending input)
    async fn find_created_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<AnalysisRecord>>;

    /// Total number of stored records
    async fn count(&self) -> Result<usize>;
}

/// Thread-safe shared repository handle
pub type SharedAnalysisRepository = Arc<dyn AnalysisRepository>;

// ============================================================================
// SQLite Implementation
// ============================================================================

/// SQLite implementation of [`AnalysisRepository`]
///
/// Uses a `Mutex` around the connection; article lists and aggregate scores
/// are stored as JSON columns since they are only ever read back whole.
pub struct SqliteAnalysisRepository {
    conn: Mutex<Connection>,
}

impl SqliteAnalysisRepository {
    /// Open (or create) a repository at the given path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.create_schema()?;

        tracing::info!(path = %path.display(), "analysis repository initialized");
        Ok(repo)
    }

    /// Create an in-memory repository (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.create_schema()?;
        Ok(repo)
    }

    fn create_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS analyses (
                id TEXT PRIMARY KEY,
                query TEXT NOT NULL,
                sources TEXT NOT NULL,
                date_from TEXT NOT NULL,
                date_to TEXT NOT NULL,
                articles TEXT NOT NULL,
                aggregate_scores TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_analyses_created_at
                ON analyses(created_at);

            CREATE INDEX IF NOT EXISTS idx_analyses_query
                ON analyses(query);
            "#,
        )?;

        Ok(())
    }

    fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::other(format!("invalid stored timestamp {raw:?}: {e}")))
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRecordRow> {
        Ok(RawRecordRow {
            id: row.get(0)?,
            query: row.get(1)?,
            sources: row.get(2)?,
            date_from: row.get(3)?,
            date_to: row.get(4)?,
            articles: row.get(5)?,
            aggregate_scores: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}

/// Escape LIKE metacharacters so a filter query matches them literally,
/// keeping the SQLite filter aligned with the mock's plain substring match
fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Intermediate row shape before JSON/timestamp decoding
struct RawRecordRow {
    id: String,
    query: String,
    sources: String,
    date_from: String,
    date_to: String,
    articles: String,
    aggregate_scores: String,
    created_at: String,
}

impl RawRecordRow {
    fn decode(self) -> Result<AnalysisRecord> {
        let articles: Vec<StoredArticle> = serde_json::from_str(&self.articles)?;
        let aggregate_scores: AggregateScores = serde_json::from_str(&self.aggregate_scores)?;

        Ok(AnalysisRecord {
            id: self.id,
            query: self.query,
            sources: self.sources,
            date_range: DateRange {
                from: SqliteAnalysisRepository::parse_timestamp(&self.date_from)?,
                to: SqliteAnalysisRepository::parse_timestamp(&self.date_to)?,
            },
            articles,
            aggregate_scores,
            created_at: SqliteAnalysisRepository::parse_timestamp(&self.created_at)?,
        })
    }
}

#[async_trait]
impl AnalysisRepository for SqliteAnalysisRepository {
    async fn store(&self, record: &AnalysisRecord) -> Result<()> {
        let articles = serde_json::to_string(&record.articles)?;
        let aggregate_scores = serde_json::to_string(&record.aggregate_scores)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO analyses
                (id, query, sources, date_from, date_to, articles, aggregate_scores, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.id,
                record.query,
                record.sources,
                record.date_range.from.to_rfc3339(),
                record.date_range.to.to_rfc3339(),
                articles,
                aggregate_scores,
                record.created_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<AnalysisRecord>> {
        let raw = {
            let conn = self.conn.lock().unwrap();
            conn.query_row(
                "SELECT id, query, sources, date_from, date_to, articles, aggregate_scores, created_at
                 FROM analyses WHERE id = ?1",
                params![id],
                Self::row_to_record,
            )
            .optional()?
        };

        raw.map(RawRecordRow::decode).transpose()
    }

    async fn find(&self, filter: &HistoryFilter, limit: usize) -> Result<Vec<AnalysisSummary>> {
        let rows = {
            let conn = self.conn.lock().unwrap();

            let mut sql = String::from(
                "SELECT id, query, sources, date_from, date_to, articles, aggregate_scores, created_at
                 FROM analyses WHERE 1=1",
            );
            let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

            if let Some(query) = &filter.query {
                sql.push_str(&format!(
                    " AND LOWER(query) LIKE '%' || LOWER(?{}) || '%' ESCAPE '\\'",
                    params_vec.len() + 1
                ));
                params_vec.push(Box::new(escape_like(query)));
            }
            if let Some(after) = filter.created_after {
                sql.push_str(&format!(" AND created_at >= ?{}", params_vec.len() + 1));
                params_vec.push(Box::new(after.to_rfc3339()));
            }
            if let Some(before) = filter.created_before {
                sql.push_str(&format!(" AND created_at <= ?{}", params_vec.len() + 1));
                params_vec.push(Box::new(before.to_rfc3339()));
            }

            sql.push_str(&format!(
                " ORDER BY created_at DESC LIMIT ?{}",
                params_vec.len() + 1
            ));
            params_vec.push(Box::new(limit as i64));

            let mut stmt = conn.prepare(&sql)?;
            let params_refs: Vec<&dyn rusqlite::ToSql> =
                params_vec.iter().map(|p| p.as_ref()).collect();

            let rows: Vec<RawRecordRow> = stmt
                .query_map(params_refs.as_slice(), Self::row_to_record)?
                .collect::<rusqlite::Result<_>>()?;
            rows
        };

        rows.into_iter()
            .map(|raw| raw.decode().map(|record| AnalysisSummary::from(&record)))
            .collect()
    }

    async fn find_created_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<AnalysisRecord>> {
        let rows = {
            let conn = self.conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, query, sources, date_from, date_to, articles, aggregate_scores, created_at
                 FROM analyses WHERE created_at >= ?1 ORDER BY created_at DESC",
            )?;

            let rows: Vec<RawRecordRow> = stmt
                .query_map(params![cutoff.to_rfc3339()], Self::row_to_record)?
                .collect::<rusqlite::Result<_>>()?;
            rows
        };

        rows.into_iter().map(RawRecordRow::decode).collect()
    }

    async fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

// ============================================================================
// Mock Implementation (for testing)
// ============================================================================

/// In-memory mock implementation of [`AnalysisRepository`]
#[derive(Default)]
pub struct MockAnalysisRepository {
    records: RwLock<HashMap<String, AnalysisRecord>>,
}

impl MockAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

#[async_trait]
impl AnalysisRepository for MockAnalysisRepository {
    async fn store(&self, record: &AnalysisRecord) -> Result<()> {
        let mut records = self.records.write().unwrap();
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<AnalysisRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.get(id).cloned())
    }

    async fn find(&self, filter: &HistoryFilter, limit: usize) -> Result<Vec<AnalysisSummary>> {
        let records = self.records.read().unwrap();
        let mut matching: Vec<&AnalysisRecord> =
            records.values().filter(|r| filter.matches(r)).collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching
            .into_iter()
            .take(limit)
            .map(AnalysisSummary::from)
            .collect())
    }

    async fn find_created_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<AnalysisRecord>> {
        let records = self.records.read().unwrap();
        let mut matching: Vec<AnalysisRecord> = records
            .values()
            .filter(|r| r.created_at >= cutoff)
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().unwrap().len())
    }
}

/// Create a shared SQLite repository
pub fn create_sqlite_repository(path: impl AsRef<Path>) -> Result<SharedAnalysisRepository> {
    let repo = SqliteAnalysisRepository::new(path)?;
    Ok(Arc::new(repo))
}

/// Create a shared mock repository
pub fn create_mock_repository() -> SharedAnalysisRepository {
    Arc::new(MockAnalysisRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keyword, Sentiment, SentimentLabel};
    use chrono::Duration;

    fn sample_record(id: &str, query: &str, created_at: DateTime<Utc>) -> AnalysisRecord {
        AnalysisRecord {
            id: id.to_string(),
            query: query.to_string(),
            sources: "all".to_string(),
            date_range: DateRange {
                from: created_at - Duration::days(7),
                to: created_at,
            },
            articles: vec![StoredArticle {
                title: "Economy booms".to_string(),
                source: "Example News".to_string(),
                url: "https://example.com/booms".to_string(),
                published_at: created_at,
                sentiment: Sentiment {
                    score: 0.42,
                    label: SentimentLabel::Positive,
                    keywords: vec![Keyword {
                        word: "booms".to_string(),
                        score: 0.4,
                    }],
                },
            }],
            aggregate_scores: AggregateScores {
                average_score: 0.42,
                positive_percentage: 100.0,
                neutral_percentage: 0.0,
                negative_percentage: 0.0,
            },
            created_at,
        }
    }

    fn test_repos() -> Vec<Box<dyn AnalysisRepository>> {
        vec![
            Box::new(SqliteAnalysisRepository::in_memory().unwrap()),
            Box::new(MockAnalysisRepository::new()),
        ]
    }

    #[tokio::test]
    async fn test_store_and_get_round_trip() {
        for repo in test_repos() {
            let record = sample_record("rec-1", "economy", Utc::now());
            repo.store(&record).await.unwrap();

            let loaded = repo.get_by_id("rec-1").await.unwrap().unwrap();
            assert_eq!(loaded.query, record.query);
            assert_eq!(loaded.aggregate_scores, record.aggregate_scores);
            assert_eq!(loaded.articles, record.articles);

            assert!(repo.get_by_id("missing").await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_find_orders_by_recency() {
        for repo in test_repos() {
            let now = Utc::now();
            repo.store(&sample_record("old", "economy", now - Duration::hours(2)))
                .await
                .unwrap();
            repo.store(&sample_record("new", "economy", now))
                .await
                .unwrap();

            let summaries = repo.find(&HistoryFilter::default(), 10).await.unwrap();
            assert_eq!(summaries.len(), 2);
            assert_eq!(summaries[0].id, "new");
            assert_eq!(summaries[1].id, "old");
        }
    }

    #[tokio::test]
    async fn test_find_query_substring_is_case_insensitive() {
        for repo in test_repos() {
            let now = Utc::now();
            repo.store(&sample_record("a", "Stock Market Crash", now))
                .await
                .unwrap();
            repo.store(&sample_record("b", "housing prices", now))
                .await
                .unwrap();

            let filter = HistoryFilter {
                query: Some("MARKET".to_string()),
                ..Default::default()
            };
            let summaries = repo.find(&filter, 10).await.unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].id, "a");
        }
    }

    #[tokio::test]
    async fn test_find_treats_like_metacharacters_literally() {
        for repo in test_repos() {
            let now = Utc::now();
            repo.store(&sample_record("a", "growth of 100%", now))
                .await
                .unwrap();
            repo.store(&sample_record("b", "growth of 100x", now))
                .await
                .unwrap();
            repo.store(&sample_record("c", "snake_case naming", now))
                .await
                .unwrap();

            // "%" must match only the literal percent sign, not any suffix
            let filter = HistoryFilter {
                query: Some("100%".to_string()),
                ..Default::default()
            };
            let summaries = repo.find(&filter, 10).await.unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].id, "a");

            // "_" must not act as a single-character wildcard
            let filter = HistoryFilter {
                query: Some("snake_case".to_string()),
                ..Default::default()
            };
            let summaries = repo.find(&filter, 10).await.unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].id, "c");
        }
    }

    #[tokio::test]
    async fn test_find_respects_limit() {
        for repo in test_repos() {
            let now = Utc::now();
            for i in 0..5 {
                repo.store(&sample_record(
                    &format!("rec-{i}"),
                    "economy",
                    now - Duration::minutes(i),
                ))
                .await
                .unwrap();
            }

            let summaries = repo.find(&HistoryFilter::default(), 3).await.unwrap();
            assert_eq!(summaries.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_find_created_since_cutoff() {
        for repo in test_repos() {
            let now = Utc::now();
            repo.store(&sample_record("recent", "economy", now - Duration::days(1)))
                .await
                .unwrap();
            repo.store(&sample_record("stale", "economy", now - Duration::days(30)))
                .await
                .unwrap();

            let records = repo
                .find_created_since(now - Duration::days(7))
                .await
                .unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].id, "recent");
        }
    }

    #[tokio::test]
    async fn test_count() {
        for repo in test_repos() {
            assert_eq!(repo.count().await.unwrap(), 0);
            repo.store(&sample_record("rec-1", "economy", Utc::now()))
                .await
                .unwrap();
            assert_eq!(repo.count().await.unwrap(), 1);
        }
    }

    #[tokio::test]
    async fn test_created_at_range_filter() {
        for repo in test_repos() {
            let now = Utc::now();
            repo.store(&sample_record("inside", "economy", now - Duration::hours(1)))
                .await
                .unwrap();
            repo.store(&sample_record("outside", "economy", now - Duration::days(3)))
                .await
                .unwrap();

            let filter = HistoryFilter {
                created_after: Some(now - Duration::days(1)),
                created_before: Some(now),
                ..Default::default()
            };
            let summaries = repo.find(&filter, 10).await.unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].id, "inside");
        }
    }

    #[tokio::test]
    async fn test_mock_utilities() {
        let mock = MockAnalysisRepository::new();
        assert!(mock.is_empty());

        mock.store(&sample_record("rec-1", "economy", Utc::now()))
            .await
            .unwrap();
        assert_eq!(mock.len(), 1);

        mock.clear();
        assert!(mock.is_empty());
    }
}
