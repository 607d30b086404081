use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The label a caller gives a room: a number (`101`, `101.5`), free text
/// (`"12B"`), or nothing at all. It is echoed back in the shape it came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomNumber {
    Number(i64),
    Decimal(f64),
    Text(String),
    /// Sent as `null` or left out
    #[default]
    Unassigned,
}

impl Display for RoomNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Unassigned => Ok(()),
        }
    }
}

impl From<i32> for RoomNumber {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for RoomNumber {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RoomNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// A room inside a hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique within the owning hotel only
    pub id: i32,
    pub room_number: RoomNumber,
    pub is_booked: bool,
}

impl Room {
    pub fn new(id: i32, room_number: RoomNumber) -> Self {
        Self {
            id,
            room_number,
            is_booked: false,
        }
    }
}
