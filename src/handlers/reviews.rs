use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppError,
    models::{
        review::{CreateReview, Review},
        Ack,
    },
    AppState,
};

pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, reviewer, shop_id, stars, comment, posted_at FROM reviews",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(reviews))
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReview>,
) -> Result<(StatusCode, Json<Ack>), AppError> {
    sqlx::query(
        "INSERT INTO reviews (reviewer, shop_id, stars, comment, posted_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&payload.reviewer)
    .bind(payload.shop_id)
    .bind(payload.stars)
    .bind(&payload.comment)
    .bind(&payload.posted_at)
    .execute(&state.db)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack {
            success: true,
            message: "Review recorded".to_string(),
        }),
    ))
}
