pub mod captcha;
pub mod middleware;
pub mod token;

pub use captcha::CaptchaVerifier;
pub use middleware::{require_booking_auth, require_client, require_staff, verify_captcha};
pub use token::{AuthContext, Claims, CredentialKind, TokenSigner, TokenVerifier};
