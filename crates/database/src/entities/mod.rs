pub mod hotels;
pub mod reservations;
