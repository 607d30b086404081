use axum::{Json, extract::State, http::StatusCode};
use log::info;

use crate::{
    dtos::hotel::{AddRoomRequest, RoomResponse},
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// Add a room to a hotel
#[utoipa::path(
    post,
    path = "/api/hotels/{id}/rooms",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = AddRoomRequest,
    responses(
        (status = 201, description = "Room added", body = RoomResponse),
        (status = 400, description = "Hotel not found", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn add_room(
    State(state): State<AppState>,
    ApiPath(hotel_id): ApiPath<i32>,
    ApiJson(body): ApiJson<AddRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let room = state.mutate(|hub| {
        hub.add_room_to_hotel(hotel_id, body.room_number)
            .map(RoomResponse::from)
    })?;

    info!("Added room {} ({}) to hotel {hotel_id}", room.id, room.room_number);
    Ok((StatusCode::CREATED, Json(room)))
}

/// List the rooms of a hotel
#[utoipa::path(
    get,
    path = "/api/hotels/{id}/rooms",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Rooms in creation order", body = [RoomResponse]),
        (status = 400, description = "Hotel not found", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    ApiPath(hotel_id): ApiPath<i32>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms: Vec<RoomResponse> = state.read(|hub| {
        hub.list_rooms(hotel_id)
            .map(|rooms| rooms.iter().map(RoomResponse::from).collect())
    })?;
    Ok(Json(rooms))
}
