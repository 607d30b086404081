pub mod hotel;
pub mod reservation;
pub mod room;

pub use hotel::Hotel;
pub use reservation::Reservation;
pub use room::{Room, RoomNumber};
