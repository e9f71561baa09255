pub mod appointment;
pub mod review;
pub mod service;
pub mod shop;
pub mod user;

use serde::Serialize;

/// Minimal acknowledgement body for write endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}
