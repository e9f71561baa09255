//! Client for the external CAPTCHA verification endpoint.

use serde::Deserialize;

use crate::{config::CaptchaConfig, error::AppError};

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
}

#[derive(Clone)]
pub struct CaptchaVerifier {
    http: reqwest::Client,
    secret: String,
    verify_url: String,
}

impl CaptchaVerifier {
    pub fn new(http: reqwest::Client, config: &CaptchaConfig) -> Self {
        Self {
            http,
            secret: config.secret.clone(),
            verify_url: config.verify_url.clone(),
        }
    }

    /// One blocking round-trip per request; the verifier has the final word.
    pub async fn verify(&self, challenge: &str) -> Result<bool, AppError> {
        let response = self
            .http
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", challenge)])
            .send()
            .await?
            .error_for_status()?
            .json::<VerifyResponse>()
            .await?;

        Ok(response.success)
    }
}
