//! Repository Module
//!
//! CRUD operations for the `restaurant` and `review` tables.

pub mod restaurant;
pub mod review;

// Re-exports
pub use restaurant::RestaurantRepository;
pub use review::ReviewRepository;

use shared::{AppError, ErrorCode};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations surface as "Database index `x` already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key"
// =============================================================================
//
// Callers may pass either "restaurant:abc" or the bare key "abc";
// `make_record_id` normalizes both into a surrealdb::RecordId.

/// Strip a `table:` prefix from an id, if present
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build a record id for `table` from a prefixed or bare id
pub fn make_record_id(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, strip_table_prefix(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_table_prefix() {
        assert_eq!(strip_table_prefix("restaurant", "restaurant:abc"), "abc");
        assert_eq!(strip_table_prefix("restaurant", "abc"), "abc");
        assert_eq!(strip_table_prefix("restaurant", "review:abc"), "review:abc");
    }

    #[test]
    fn test_make_record_id_accepts_both_forms() {
        let a = make_record_id("restaurant", "restaurant:abc");
        let b = make_record_id("restaurant", "abc");
        assert_eq!(a, b);
        assert_eq!(a.table(), "restaurant");
    }

    #[test]
    fn test_repo_error_into_app_error() {
        let err: AppError = RepoError::Duplicate("dup".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        let err: AppError = RepoError::Database("boom".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
