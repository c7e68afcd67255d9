//! Review Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Review record as stored in the `review` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// The reviewed restaurant
    pub restaurant: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub rating: u8,
    /// Unix millis
    pub created_at: i64,
}
