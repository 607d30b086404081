use crate::routes::{health, hotel, reservation, room};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        hotel::create_hotel,
        hotel::list_hotels,
        hotel::update_hotel,
        hotel::delete_hotel,
        room::add_room,
        room::list_rooms,
        reservation::create_reservation,
        reservation::list_reservations,
        reservation::update_reservation,
        reservation::delete_reservation,
        reservation::check_in,
        reservation::check_out
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Hotels", description = "Hotel related endpoints"),
        (name = "Rooms", description = "Rooms of a hotel"),
        (name = "Reservations", description = "Bookings, check-in and check-out"),
    ),
    info(
        title = "HotelHub API",
        version = "1.0.0",
        description = "Hotel, room and reservation management",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
