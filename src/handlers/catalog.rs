use axum::{extract::State, Extension, Json};

use crate::{
    auth::AuthContext,
    error::AppError,
    models::{
        service::Service,
        shop::{Shop, ShopStatusPayload},
        Ack,
    },
    AppState,
};

pub async fn list_shops(State(state): State<AppState>) -> Result<Json<Vec<Shop>>, AppError> {
    let shops = sqlx::query_as::<_, Shop>("SELECT id, name, location, open FROM shops")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(shops))
}

pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, AppError> {
    let services =
        sqlx::query_as::<_, Service>("SELECT id, shop_id, name, price, description FROM services")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(services))
}

/// Staff-only open/closed toggle.
pub async fn set_shop_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<ShopStatusPayload>,
) -> Result<Json<Ack>, AppError> {
    let result = sqlx::query("UPDATE shops SET open = ? WHERE id = ?")
        .bind(payload.open)
        .bind(payload.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Shop"));
    }

    tracing::info!(
        "shop {} set to open={} by staff {}",
        payload.id,
        payload.open,
        auth.claims.sub
    );

    Ok(Json(Ack {
        success: true,
        message: "Shop status updated".to_string(),
    }))
}
