use models::{Hotel, Room, RoomNumber};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub rooms: Vec<RoomResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    /// Number or text, echoed as given
    #[schema(value_type = Object, example = 101)]
    pub room_number: RoomNumber,
    pub is_booked: bool,
}

/// Body of hotel create and update. Missing fields count as empty.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRoomRequest {
    #[serde(default)]
    #[schema(value_type = Object, example = 101)]
    pub room_number: RoomNumber,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number.clone(),
            is_booked: room.is_booked,
        }
    }
}

impl From<&Hotel> for HotelResponse {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            rooms: hotel.rooms.iter().map(RoomResponse::from).collect(),
        }
    }
}
