//! Restaurant Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Restaurant;
use shared::models::RatingSummary;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all restaurants ordered by name (default projection)
    pub async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * OMIT staff, geocoded_address, created_at FROM restaurant ORDER BY name")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurants that have been geocoded (default projection)
    pub async fn find_located(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * OMIT staff, geocoded_address, created_at FROM restaurant WHERE location != NONE")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by id (default projection)
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Restaurant>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * OMIT staff, geocoded_address, created_at FROM $id")
            .bind(("id", id.clone()))
            .await?;
        let restaurants: Vec<Restaurant> = result.take(0)?;
        Ok(restaurants.into_iter().next())
    }

    /// Find restaurant by id including the fields default reads omit
    pub async fn find_by_id_full(&self, id: &RecordId) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self.base.db().select(id.clone()).await?;
        Ok(restaurant)
    }

    /// Find restaurants by slug. Slugs are not unique.
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * OMIT staff, geocoded_address, created_at FROM restaurant WHERE slug = $slug ORDER BY name")
            .bind(("slug", slug.to_string()))
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Insert a restaurant. Violating the (name, suburb) index yields `Duplicate`.
    pub async fn create(&self, restaurant: Restaurant) -> RepoResult<Restaurant> {
        let created: Option<Restaurant> =
            self.base.db().create(TABLE).content(restaurant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    /// Replace the stored record with `restaurant`
    pub async fn replace(&self, id: &RecordId, restaurant: Restaurant) -> RepoResult<Restaurant> {
        if self.find_by_id_full(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
        }

        let updated: Option<Restaurant> = self
            .base
            .db()
            .update(id.clone())
            .content(Restaurant { id: None, ..restaurant })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
    }

    /// Write the rating aggregate without touching anything else
    pub async fn set_ratings(&self, id: &RecordId, summary: RatingSummary) -> RepoResult<()> {
        if self.find_by_id_full(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
        }

        self.base
            .db()
            .query("UPDATE $id MERGE $data")
            .bind(("id", id.clone()))
            .bind(("data", summary))
            .await?
            .check()?;
        Ok(())
    }

    /// Delete a restaurant and every review referencing it in one transaction
    pub async fn delete_with_reviews(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE review WHERE restaurant = $restaurant;
                 DELETE $restaurant;
                 COMMIT TRANSACTION;",
            )
            .bind(("restaurant", id.clone()))
            .await?
            .check()?;
        Ok(())
    }
}
