use serde::Deserialize;

/// Appointments are insert-only; there is no read or cancellation path.
#[derive(Debug, Deserialize)]
pub struct CreateAppointment {
    pub date: String,
    pub time: String,
    pub user_id: i64,
    pub shop_id: i64,
    pub service_id: i64,
}
