pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod payment;
pub mod rest;

use sqlx::SqlitePool;

use crate::auth::{CaptchaVerifier, CredentialKind, TokenSigner, TokenVerifier};
use crate::config::Config;
use crate::payment::PaymentClient;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub signer: TokenSigner,
    pub client_tokens: TokenVerifier,
    pub staff_tokens: TokenVerifier,
    pub booking_tokens: TokenVerifier,
    pub captcha: CaptchaVerifier,
    pub payment: PaymentClient,
}

impl AppState {
    pub fn new(config: &Config, db: SqlitePool) -> Self {
        // One outbound client shared by every upstream call.
        let http = reqwest::Client::new();

        Self {
            db,
            signer: TokenSigner::new(&config.auth.client_secret),
            client_tokens: TokenVerifier::new(vec![(
                CredentialKind::Client,
                config.auth.client_secret.as_str(),
            )]),
            staff_tokens: TokenVerifier::new(vec![(
                CredentialKind::Staff,
                config.auth.staff_secret.as_str(),
            )]),
            // Staff is tried first; order is load-bearing for dual-credential routes.
            booking_tokens: TokenVerifier::new(vec![
                (CredentialKind::Staff, config.auth.staff_secret.as_str()),
                (CredentialKind::Client, config.auth.client_secret.as_str()),
            ]),
            captcha: CaptchaVerifier::new(http.clone(), &config.captcha),
            payment: PaymentClient::new(http, &config.payment, &config.public_base_url),
        }
    }
}
