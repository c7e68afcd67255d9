//! Database Module
//!
//! Embedded SurrealDB connection and schema definitions

pub mod models;
pub mod repository;

use crate::core::Config;
use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Tables stay schemaless; the indexes carry the invariants.
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS restaurant SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS restaurant_name_suburb ON TABLE restaurant FIELDS name, suburb UNIQUE;
    DEFINE INDEX IF NOT EXISTS restaurant_slug ON TABLE restaurant FIELDS slug;
    DEFINE INDEX IF NOT EXISTS restaurant_location ON TABLE restaurant FIELDS location.coordinates;

    DEFINE TABLE IF NOT EXISTS review SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS review_restaurant ON TABLE review FIELDS restaurant;
    DEFINE INDEX IF NOT EXISTS review_created_at ON TABLE review FIELDS created_at;
";

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl std::fmt::Debug for DbService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbService").finish_non_exhaustive()
    }
}

impl DbService {
    /// Open (or create) the on-disk database under the configured work dir
    pub async fn open(config: &Config) -> Result<Self, AppError> {
        let path = config.database_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::database(format!("Failed to create {parent:?}: {e}")))?;
        }

        let db = Surreal::new::<RocksDb>(path.clone())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %path.display(), "Database connection established (RocksDB)");

        Self::init(db, &config.db_namespace, &config.db_name).await
    }

    /// In-memory database, used by tests and throwaway tooling
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let config = Config::default();
        Self::init(db, &config.db_namespace, &config.db_name).await
    }

    async fn init(db: Surreal<Db>, namespace: &str, database: &str) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}
