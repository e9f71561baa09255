//! HMAC-signed bearer tokens, verified by trial over an ordered list of
//! credential kinds. First secret that validates the token wins; adding a
//! new credential kind is a matter of appending an entry to the list.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Staff,
    Client,
}

/// Signs the tokens issued at login.
#[derive(Clone)]
pub struct TokenSigner {
    key: EncodingKey,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issued tokens carry the user id and email and expire in one hour.
    pub fn sign(&self, user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            exp,
        };
        encode(&Header::default(), &claims, &self.key)
    }
}

#[derive(Clone)]
pub struct TokenVerifier {
    entries: Vec<(CredentialKind, DecodingKey)>,
}

impl TokenVerifier {
    pub fn new(entries: Vec<(CredentialKind, &str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(kind, secret)| (kind, DecodingKey::from_secret(secret.as_bytes())))
                .collect(),
        }
    }

    /// Tries each configured credential kind in order; exhaustion means the
    /// token is not valid under any of them.
    pub fn verify(&self, token: &str) -> Result<AuthContext, AppError> {
        for (kind, key) in &self.entries {
            match decode::<Claims>(token, key, &Validation::default()) {
                Ok(data) => {
                    return Ok(AuthContext {
                        kind: *kind,
                        claims: data.claims,
                    })
                }
                Err(e) => tracing::debug!("token rejected as {:?}: {}", kind, e),
            }
        }
        Err(AppError::InvalidToken)
    }
}

/// The verified identity of a request, bound to the credential kind that
/// produced it.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub kind: CredentialKind,
    pub claims: Claims,
}

impl AuthContext {
    pub fn staff(&self) -> Option<&Claims> {
        (self.kind == CredentialKind::Staff).then_some(&self.claims)
    }

    pub fn client(&self) -> Option<&Claims> {
        (self.kind == CredentialKind::Client).then_some(&self.claims)
    }
}
