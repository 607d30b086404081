use serde::{Deserialize, Serialize};

use crate::room::{Room, RoomNumber};

/// A hotel and the rooms it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HotelFields")]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub rooms: Vec<Room>,
    /// Identifier handed to the next room added to this hotel
    #[serde(skip)]
    next_room_id: i32,
}

fn first_room_id() -> i32 {
    1
}

/// Wire form of [`Hotel`]; the room counter resumes after the highest room id
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelFields {
    id: i32,
    name: String,
    location: String,
    #[serde(default)]
    rooms: Vec<Room>,
}

impl From<HotelFields> for Hotel {
    fn from(fields: HotelFields) -> Self {
        let next_room_id = fields
            .rooms
            .iter()
            .map(|r| r.id + 1)
            .max()
            .unwrap_or_else(first_room_id);

        Self {
            id: fields.id,
            name: fields.name,
            location: fields.location,
            rooms: fields.rooms,
            next_room_id,
        }
    }
}

impl Hotel {
    pub fn new(id: i32, name: String, location: String) -> Self {
        Self {
            id,
            name,
            location,
            rooms: Vec::new(),
            next_room_id: first_room_id(),
        }
    }

    pub fn room(&self, room_id: i32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    pub fn room_mut(&mut self, room_id: i32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == room_id)
    }

    /// Appends an unbooked room and returns it. Room ids are never reused
    /// within a hotel.
    pub fn push_room(&mut self, room_number: RoomNumber) -> &Room {
        let id = self.next_room_id;
        self.next_room_id += 1;
        self.rooms.push(Room::new(id, room_number));
        &self.rooms[self.rooms.len() - 1]
    }
}
