//! Application configuration loaded once at startup from environment variables.
//!
//! Required: `DATABASE_URL`, `JWT_STAFF_SECRET`, `JWT_CLIENT_SECRET`,
//! `CAPTCHA_SECRET`, `PAYMENT_ACCESS_TOKEN`, `PAYMENT_PAYER_EMAIL`.
//! Optional: `BIND_ADDR`, `PUBLIC_BASE_URL`, `CAPTCHA_VERIFY_URL`,
//! `PAYMENT_API_URL`, `PAYMENT_CURRENCY`.

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_CAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
const DEFAULT_PAYMENT_API_URL: &str = "https://api.mercadopago.com/checkout/preferences";
const DEFAULT_PAYMENT_CURRENCY: &str = "BRL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Public URL the payment processor redirects back to after checkout.
    pub public_base_url: String,
    pub auth: AuthConfig,
    pub captcha: CaptchaConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub staff_secret: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct CaptchaConfig {
    pub secret: String,
    pub verify_url: String,
}

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub access_token: String,
    pub api_url: String,
    pub currency: String,
    pub payer_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            public_base_url: optional("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL),
            auth: AuthConfig {
                staff_secret: required("JWT_STAFF_SECRET")?,
                client_secret: required("JWT_CLIENT_SECRET")?,
            },
            captcha: CaptchaConfig {
                secret: required("CAPTCHA_SECRET")?,
                verify_url: optional("CAPTCHA_VERIFY_URL", DEFAULT_CAPTCHA_VERIFY_URL),
            },
            payment: PaymentConfig {
                access_token: required("PAYMENT_ACCESS_TOKEN")?,
                api_url: optional("PAYMENT_API_URL", DEFAULT_PAYMENT_API_URL),
                currency: optional("PAYMENT_CURRENCY", DEFAULT_PAYMENT_CURRENCY),
                payer_email: required("PAYMENT_PAYER_EMAIL")?,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment is process-global, so everything lives in one test.
    #[test]
    fn from_env_reads_required_and_defaults() {
        let vars = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_STAFF_SECRET", "staff"),
            ("JWT_CLIENT_SECRET", "client"),
            ("CAPTCHA_SECRET", "captcha"),
            ("PAYMENT_ACCESS_TOKEN", "token"),
            ("PAYMENT_PAYER_EMAIL", "payer@example.com"),
        ];

        std::env::remove_var("DATABASE_URL");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == "DATABASE_URL"));

        for (name, value) in vars {
            std::env::set_var(name, value);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.captcha.verify_url, DEFAULT_CAPTCHA_VERIFY_URL);
        assert_eq!(config.payment.currency, "BRL");
        assert_eq!(config.auth.staff_secret, "staff");
    }
}
