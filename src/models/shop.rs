use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct ShopStatusPayload {
    pub id: i64,
    pub open: bool,
}
