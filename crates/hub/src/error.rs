use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

pub type HubResult<T> = Result<T, HubError>;

/// Kinds of entity an identifier can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Hotel,
    Room,
    Reservation,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Hotel => write!(f, "Hotel"),
            Self::Room => write!(f, "Room"),
            Self::Reservation => write!(f, "Reservation"),
        }
    }
}

/// Required text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HotelName,
    HotelLocation,
    GuestName,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::HotelName => write!(f, "Hotel name"),
            Self::HotelLocation => write!(f, "Hotel location"),
            Self::GuestName => write!(f, "Guest name"),
        }
    }
}

/// Check-in / check-out called out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StayError {
    #[error("Guest has already checked in.")]
    AlreadyCheckedIn,
    #[error("Guest hasn't checked in yet.")]
    NotCheckedIn,
    #[error("Guest has already checked out.")]
    AlreadyCheckedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("{0} is invalid.")]
    Validation(Field),

    #[error("A hotel with this name already exists.")]
    DuplicateName(String),

    #[error("{0} not found.")]
    NotFound(Entity),

    #[error("Room is already booked.")]
    Conflict { hotel_id: i32, room_id: i32 },

    #[error(transparent)]
    State(#[from] StayError),
}
