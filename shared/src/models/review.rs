//! Review Model

use serde::{Deserialize, Serialize};

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    /// Restaurant id ("restaurant:xxx" or bare key)
    pub restaurant: String,
    /// Author id ("user:xxx" or bare key)
    pub user: Option<String>,
    pub title: String,
    pub text: Option<String>,
    /// 1..=5
    pub rating: u8,
}
