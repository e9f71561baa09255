use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{auth::AuthContext, error::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Exchanges a service selection for the processor's hosted-payment URL,
/// returned as a bare JSON string.
pub async fn create_checkout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<Json<String>, AppError> {
    let preference = state
        .payment
        .preference(&payload.title, &payload.description, payload.price);

    let url = state.payment.checkout_url(&preference).await?;

    tracing::info!(
        "checkout session created for client {}: {}",
        auth.claims.sub,
        payload.title
    );

    Ok(Json(url))
}
