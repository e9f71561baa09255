use axum::{extract::State, Extension, Json};

use crate::{
    auth::AuthContext,
    error::AppError,
    models::{appointment::CreateAppointment, Ack},
    AppState,
};

// Responds 200 rather than 201; existing clients depend on it.
pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateAppointment>,
) -> Result<Json<Ack>, AppError> {
    sqlx::query(
        "INSERT INTO appointments (date, time, user_id, shop_id, service_id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&payload.date)
    .bind(&payload.time)
    .bind(payload.user_id)
    .bind(payload.shop_id)
    .bind(payload.service_id)
    .execute(&state.db)
    .await?;

    tracing::info!(
        "appointment booked for user {} at shop {} ({:?} credential)",
        payload.user_id,
        payload.shop_id,
        auth.kind
    );

    Ok(Json(Ack {
        success: true,
        message: "Appointment booked".to_string(),
    }))
}
