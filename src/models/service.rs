use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}
