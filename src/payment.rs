//! Checkout preferences for the hosted-payment processor. A preference is
//! built per checkout request, never persisted, and exchanged for the
//! processor's redirect URL.

use serde::{Deserialize, Serialize};

use crate::{config::PaymentConfig, error::AppError};

const INSTALLMENTS: u32 = 3;

#[derive(Debug, Serialize)]
pub struct Preference {
    pub items: Vec<Item>,
    pub payer: Payer,
    pub payment_methods: PaymentMethods,
    pub back_urls: BackUrls,
    pub auto_return: String,
}

#[derive(Debug, Serialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub quantity: u32,
    pub currency_id: String,
    pub unit_price: f64,
}

#[derive(Debug, Serialize)]
pub struct Payer {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentMethods {
    pub installments: u32,
}

#[derive(Debug, Serialize)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

#[derive(Debug, Deserialize)]
struct PreferenceResponse {
    init_point: String,
}

#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    access_token: String,
    api_url: String,
    currency: String,
    payer_email: String,
    redirect_base: String,
}

impl PaymentClient {
    pub fn new(http: reqwest::Client, config: &PaymentConfig, redirect_base: &str) -> Self {
        Self {
            http,
            access_token: config.access_token.clone(),
            api_url: config.api_url.clone(),
            currency: config.currency.clone(),
            payer_email: config.payer_email.clone(),
            redirect_base: redirect_base.to_owned(),
        }
    }

    /// Single line item, configured currency, fixed installment plan. The
    /// price is passed through untouched.
    pub fn preference(&self, title: &str, description: &str, unit_price: f64) -> Preference {
        Preference {
            items: vec![Item {
                title: title.to_owned(),
                description: description.to_owned(),
                quantity: 1,
                currency_id: self.currency.clone(),
                unit_price,
            }],
            payer: Payer {
                email: self.payer_email.clone(),
            },
            payment_methods: PaymentMethods {
                installments: INSTALLMENTS,
            },
            back_urls: BackUrls {
                success: format!("{}/checkout/success", self.redirect_base),
                failure: format!("{}/checkout/failure", self.redirect_base),
                pending: format!("{}/checkout/pending", self.redirect_base),
            },
            auto_return: "approved".to_string(),
        }
    }

    pub async fn checkout_url(&self, preference: &Preference) -> Result<String, AppError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.access_token)
            .json(preference)
            .send()
            .await?
            .error_for_status()?
            .json::<PreferenceResponse>()
            .await?;

        Ok(response.init_point)
    }
}
