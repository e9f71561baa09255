use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{auth, handlers, AppState};

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/SignIn", post(handlers::auth::sign_in))
        .route("/listBarbearia", get(handlers::catalog::list_shops))
        .route("/listServico", get(handlers::catalog::list_services))
        .route("/SearchAvaliation", get(handlers::reviews::list_reviews));

    let signup = Router::new()
        .route("/SignUp", post(handlers::auth::sign_up))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::verify_captcha,
        ));

    let client = Router::new()
        .route("/avaliacao", post(handlers::reviews::create_review))
        .route("/Checkout", post(handlers::checkout::create_checkout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_client,
        ));

    let booking = Router::new()
        .route("/agendamento", post(handlers::appointments::create_appointment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_booking_auth,
        ));

    let staff = Router::new()
        .route("/barbearia/status", put(handlers::catalog::set_shop_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_staff,
        ));

    Router::new()
        .merge(public)
        .merge(signup)
        .merge(client)
        .merge(booking)
        .merge(staff)
        .with_state(state)
}
