use chrono::{DateTime, Utc};
use models::Reservation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

/// Body of reservation create and update. Missing ids never resolve and a
/// missing guest name counts as empty.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[serde(default)]
    pub hotel_id: i32,
    #[serde(default)]
    pub room_id: i32,
    #[serde(default)]
    pub guest_name: String,
}

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            hotel_id: reservation.hotel_id,
            room_id: reservation.room_id,
            guest_name: reservation.guest_name.clone(),
            check_in: reservation.check_in,
            check_out: reservation.check_out,
        }
    }
}
