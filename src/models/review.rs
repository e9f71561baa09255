use serde::{Deserialize, Serialize};

/// Reviewer is a free-form display name, deliberately not a user id.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub reviewer: String,
    pub shop_id: i64,
    pub stars: i64,
    pub comment: String,
    pub posted_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub reviewer: String,
    pub shop_id: i64,
    pub stars: i64,
    pub comment: String,
    pub posted_at: String,
}
