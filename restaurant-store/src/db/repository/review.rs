//! Review Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Review;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a review
    pub async fn create(&self, review: Review) -> RepoResult<Review> {
        let created: Option<Review> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    /// Reviews of a restaurant, newest first
    pub async fn find_by_restaurant(&self, restaurant: &RecordId) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT * FROM review WHERE restaurant = $restaurant ORDER BY created_at DESC")
            .bind(("restaurant", restaurant.clone()))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Number of reviews referencing a restaurant
    pub async fn count_by_restaurant(&self, restaurant: &RecordId) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM review WHERE restaurant = $restaurant GROUP ALL")
            .bind(("restaurant", restaurant.clone()))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    /// Delete every review referencing a restaurant
    pub async fn delete_by_restaurant(&self, restaurant: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE review WHERE restaurant = $restaurant")
            .bind(("restaurant", restaurant.clone()))
            .await?
            .check()?;
        Ok(())
    }
}
