//! Restaurant service errors

use shared::{AppError, ErrorCode};
use thiserror::Error;

use super::pipeline::SaveError;
use crate::db::repository::RepoError;
use crate::geocoding::GeocodeError;
use crate::utils::FieldError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("{0}")]
    InvalidRating(FieldError),

    #[error("Restaurant '{name}' already exists in {suburb}")]
    Conflict { name: String, suburb: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Geocoding(#[from] GeocodeError),

    /// Nothing was removed
    #[error("Failed to delete {restaurant} with its reviews: {source}")]
    CascadeDelete {
        restaurant: String,
        #[source]
        source: RepoError,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<SaveError> for StoreError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Validation(e) => StoreError::Validation(e),
            SaveError::Geocoding(e) => StoreError::Geocoding(e),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => StoreError::NotFound(msg),
            // Callers that know the (name, suburb) pair map duplicates to Conflict
            RepoError::Duplicate(msg) | RepoError::Database(msg) => StoreError::Database(msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => e.into(),
            StoreError::Geocoding(e) => e.into(),
            StoreError::InvalidRating(e) => {
                AppError::with_message(ErrorCode::ReviewInvalidRating, e.message)
                    .with_detail("field", e.field)
                    .with_detail("rule", e.rule.as_str())
            }
            StoreError::Conflict { ref name, ref suburb } => {
                AppError::with_message(ErrorCode::RestaurantAlreadyExists, err.to_string())
                    .with_detail("name", name.clone())
                    .with_detail("suburb", suburb.clone())
            }
            StoreError::NotFound(_) => {
                AppError::with_message(ErrorCode::RestaurantNotFound, err.to_string())
            }
            StoreError::CascadeDelete { ref restaurant, .. } => {
                AppError::with_message(ErrorCode::CascadeDeleteFailed, err.to_string())
                    .with_detail("restaurant", restaurant.clone())
            }
            StoreError::Database(msg) => AppError::database(msg),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
