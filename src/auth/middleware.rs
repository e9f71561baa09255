use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{
    auth::token::TokenVerifier,
    error::AppError,
    AppState,
};

/// Guards routes reserved for logged-in clients.
pub async fn require_client(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state.client_tokens, req, next).await
}

/// Guards routes reserved for staff.
pub async fn require_staff(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state.staff_tokens, req, next).await
}

/// Guards booking routes, open to staff and client credentials alike.
pub async fn require_booking_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state.booking_tokens, req, next).await
}

async fn authorize(
    verifier: &TokenVerifier,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(req.headers())?.to_owned();
    let ctx = verifier.verify(&token)?;
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// CAPTCHA gate: the challenge token travels in the Authorization header and
/// is checked against the external verifier before the handler runs.
pub async fn verify_captcha(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let challenge = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .ok_or(AppError::MissingToken)?;

    if state.captcha.verify(&challenge).await? {
        Ok(next.run(req).await)
    } else {
        Err(AppError::CaptchaRejected)
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AppError::MissingToken)?;

    let header = header.to_str().map_err(|_| AppError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MissingToken)?
        .trim();

    if token.is_empty() {
        return Err(AppError::MissingToken);
    }

    Ok(token)
}
