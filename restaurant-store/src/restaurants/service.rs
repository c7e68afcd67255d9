//! Restaurant Service
//!
//! Owns the restaurant lifecycle: every create and update is trimmed,
//! validated and sent through the [`SavePipeline`] before it reaches the
//! database; deletes remove the restaurant's reviews in the same transaction.

use std::sync::Arc;

use shared::models::{RatingSummary, RestaurantCreate, RestaurantUpdate, ReviewCreate};
use surrealdb::RecordId;

use super::error::{StoreError, StoreResult};
use super::pipeline::SavePipeline;
use super::validation::{trim_restaurant, validate_rating, validate_restaurant, validate_review};
use crate::db::DbService;
use crate::db::models::{Restaurant, Review, dedup_staff};
use crate::db::repository::{RepoError, RestaurantRepository, ReviewRepository, make_record_id};
use crate::geocoding::Geocoder;
use crate::utils::FieldError;
use crate::utils::geo::haversine_km;
use crate::utils::time::now_millis;

const RESTAURANT_TABLE: &str = "restaurant";
const USER_TABLE: &str = "user";

/// A restaurant with its distance from a query point
#[derive(Debug, Clone)]
pub struct NearbyRestaurant {
    pub restaurant: Restaurant,
    pub distance_km: f64,
}

#[derive(Clone)]
pub struct RestaurantService {
    restaurants: RestaurantRepository,
    reviews: ReviewRepository,
    pipeline: Arc<SavePipeline>,
}

impl std::fmt::Debug for RestaurantService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantService")
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

impl RestaurantService {
    pub fn new(db: &DbService, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            restaurants: RestaurantRepository::new(db.db.clone()),
            reviews: ReviewRepository::new(db.db.clone()),
            pipeline: Arc::new(SavePipeline::new(geocoder)),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub async fn create(&self, data: RestaurantCreate) -> StoreResult<Restaurant> {
        let mut candidate = Restaurant::new(data.name, data.suburb);
        candidate.description = data.description;
        candidate.website = data.website;
        candidate.phone = data.phone;
        candidate.address = Some(data.address);
        candidate.staff = staff_ids(&data.staff);
        candidate.cuisine = data.cuisine;
        candidate.image_cover = data.image_cover;
        candidate.images = data.images;
        candidate.menu = data.menu;
        candidate.delivery = data.delivery.unwrap_or(false);
        candidate.takeaway = data.takeaway.unwrap_or(false);
        candidate.cash_only = data.cash_only.unwrap_or(false);
        candidate.wheelchair_accessible = data.wheelchair_accessible.unwrap_or(false);

        let mut restaurant = self.prepare(candidate).await?;
        restaurant.created_at = Some(now_millis());

        let (name, suburb) = (restaurant.name.clone(), restaurant.suburb.clone());
        let created = self
            .restaurants
            .create(restaurant)
            .await
            .map_err(|e| conflict_or(e, &name, &suburb))?;

        tracing::info!(id = ?created.id_string(), name = %created.name, "Restaurant created");
        Ok(created)
    }

    /// Merge `data` into the stored record and save it.
    ///
    /// Without a new `address` the stored location is geocoded again.
    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> StoreResult<Restaurant> {
        let rid = restaurant_id(id);
        let mut candidate = self.load_full(&rid).await?;

        if let Some(v) = data.name {
            candidate.name = v;
        }
        if let Some(v) = data.description {
            candidate.description = Some(v);
        }
        if let Some(v) = data.website {
            candidate.website = Some(v);
        }
        if let Some(v) = data.phone {
            candidate.phone = Some(v);
        }
        if let Some(v) = data.address {
            candidate.address = Some(v);
        }
        if let Some(v) = data.staff {
            candidate.staff = staff_ids(&v);
        }
        if let Some(v) = data.suburb {
            candidate.suburb = v;
        }
        if let Some(v) = data.cuisine {
            candidate.cuisine = v;
        }
        if let Some(v) = data.image_cover {
            candidate.image_cover = Some(v);
        }
        if let Some(v) = data.images {
            candidate.images = v;
        }
        if let Some(v) = data.menu {
            candidate.menu = v;
        }
        if let Some(v) = data.delivery {
            candidate.delivery = v;
        }
        if let Some(v) = data.takeaway {
            candidate.takeaway = v;
        }
        if let Some(v) = data.cash_only {
            candidate.cash_only = v;
        }
        if let Some(v) = data.wheelchair_accessible {
            candidate.wheelchair_accessible = v;
        }

        let restaurant = self.prepare(candidate).await?;
        self.store(&rid, restaurant).await
    }

    /// Save the stored record again without changes. The slug is derived
    /// and the location geocoded anew.
    pub async fn save(&self, id: &str) -> StoreResult<Restaurant> {
        let rid = restaurant_id(id);
        let candidate = self.load_full(&rid).await?;
        let restaurant = self.prepare(candidate).await?;
        self.store(&rid, restaurant).await
    }

    /// Write the rating aggregate. Skips validation and the save pipeline.
    pub async fn set_ratings(&self, id: &str, summary: RatingSummary) -> StoreResult<()> {
        let rid = restaurant_id(id);
        self.restaurants.set_ratings(&rid, summary).await?;
        tracing::debug!(id = %rid, average = summary.ratings_average, quantity = summary.ratings_quantity, "Ratings updated");
        Ok(())
    }

    /// Delete a restaurant and all of its reviews. Returns the number of
    /// reviews removed.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        let rid = restaurant_id(id);
        if self.restaurants.find_by_id(&rid).await?.is_none() {
            return Err(StoreError::NotFound(format!("Restaurant {rid}")));
        }

        let review_count = self.reviews.count_by_restaurant(&rid).await?;

        match self.restaurants.delete_with_reviews(&rid).await {
            Ok(()) => {
                tracing::info!(id = %rid, reviews = review_count, "Restaurant deleted with its reviews");
                Ok(review_count)
            }
            Err(source) => {
                tracing::error!(id = %rid, error = %source, "Cascade delete failed, nothing removed");
                Err(StoreError::CascadeDelete {
                    restaurant: rid.to_string(),
                    source,
                })
            }
        }
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub async fn add_review(&self, data: ReviewCreate) -> StoreResult<Review> {
        let data = validate_review(data)?;
        validate_rating(data.rating).map_err(StoreError::InvalidRating)?;
        let rid = restaurant_id(&data.restaurant);
        if self.restaurants.find_by_id(&rid).await?.is_none() {
            return Err(StoreError::NotFound(format!("Restaurant {rid}")));
        }

        let review = Review {
            id: None,
            restaurant: rid,
            user: data.user.as_deref().map(|u| make_record_id(USER_TABLE, u)),
            title: data.title,
            text: data.text,
            rating: data.rating,
            created_at: now_millis(),
        };
        Ok(self.reviews.create(review).await?)
    }

    /// Reviews of a restaurant, newest first
    pub async fn reviews(&self, id: &str) -> StoreResult<Vec<Review>> {
        Ok(self.reviews.find_by_restaurant(&restaurant_id(id)).await?)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn find_all(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(self.restaurants.find_all().await?)
    }

    /// Default projection: no `staff`, `geocoded_address` or `created_at`
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Restaurant> {
        let rid = restaurant_id(id);
        self.restaurants
            .find_by_id(&rid)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Restaurant {rid}")))
    }

    pub async fn find_by_id_full(&self, id: &str) -> StoreResult<Restaurant> {
        self.load_full(&restaurant_id(id)).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> StoreResult<Vec<Restaurant>> {
        Ok(self.restaurants.find_by_slug(slug).await?)
    }

    /// Located restaurants within `radius_km` of `(longitude, latitude)`,
    /// nearest first
    pub async fn find_within_radius(
        &self,
        longitude: f64,
        latitude: f64,
        radius_km: f64,
    ) -> StoreResult<Vec<NearbyRestaurant>> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(FieldError::out_of_range("radius", "Radius must be a positive distance").into());
        }

        let origin = [longitude, latitude];
        let mut nearby: Vec<NearbyRestaurant> = self
            .restaurants
            .find_located()
            .await?
            .into_iter()
            .filter_map(|restaurant| {
                let coordinates = restaurant.location.as_ref()?.coordinates;
                let distance_km = haversine_km(origin, coordinates);
                (distance_km <= radius_km).then_some(NearbyRestaurant {
                    restaurant,
                    distance_km,
                })
            })
            .collect();
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(nearby)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn load_full(&self, rid: &RecordId) -> StoreResult<Restaurant> {
        self.restaurants
            .find_by_id_full(rid)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Restaurant {rid}")))
    }

    /// Trim, validate, then run the save pipeline
    async fn prepare(&self, candidate: Restaurant) -> StoreResult<Restaurant> {
        let candidate = trim_restaurant(candidate);
        validate_restaurant(&candidate)?;
        Ok(self.pipeline.run(candidate).await?)
    }

    async fn store(&self, rid: &RecordId, restaurant: Restaurant) -> StoreResult<Restaurant> {
        let (name, suburb) = (restaurant.name.clone(), restaurant.suburb.clone());
        let saved = self
            .restaurants
            .replace(rid, restaurant)
            .await
            .map_err(|e| conflict_or(e, &name, &suburb))?;
        tracing::info!(id = %rid, name = %saved.name, "Restaurant saved");
        Ok(saved)
    }
}

fn restaurant_id(id: &str) -> RecordId {
    make_record_id(RESTAURANT_TABLE, id)
}

fn staff_ids(ids: &[String]) -> Vec<RecordId> {
    dedup_staff(ids.iter().map(|id| make_record_id(USER_TABLE, id)))
}

fn conflict_or(err: RepoError, name: &str, suburb: &str) -> StoreError {
    match err {
        RepoError::Duplicate(_) => StoreError::Conflict {
            name: name.to_string(),
            suburb: suburb.to_string(),
        },
        other => other.into(),
    }
}
