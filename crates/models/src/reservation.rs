use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest's hold on one room of one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub hotel_id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(id: i32, hotel_id: i32, room_id: i32, guest_name: String) -> Self {
        Self {
            id,
            hotel_id,
            room_id,
            guest_name,
            check_in: None,
            check_out: None,
        }
    }

    /// A reservation holds its room until the guest checks out
    pub fn is_active(&self) -> bool {
        self.check_out.is_none()
    }

    pub fn references(&self, hotel_id: i32, room_id: i32) -> bool {
        self.hotel_id == hotel_id && self.room_id == room_id
    }
}
