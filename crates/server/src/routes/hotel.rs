use axum::{Json, extract::State, http::StatusCode};
use log::info;

use crate::{
    dtos::hotel::{HotelRequest, HotelResponse},
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// Create a hotel
#[utoipa::path(
    post,
    path = "/api/hotels",
    request_body = HotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = HotelResponse),
        (status = 400, description = "Empty name or location, or name already taken", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HotelRequest>,
) -> Result<(StatusCode, Json<HotelResponse>), ApiError> {
    let hotel = state.mutate(|hub| {
        hub.create_hotel(&body.name, &body.location)
            .map(HotelResponse::from)
    })?;

    info!("Created hotel {} ({})", hotel.id, hotel.name);
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// List every hotel with its rooms
#[utoipa::path(
    get,
    path = "/api/hotels",
    responses(
        (status = 200, description = "All hotels in creation order", body = [HotelResponse])
    ),
    tag = "Hotels"
)]
pub async fn list_hotels(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelResponse>>, ApiError> {
    let hotels: Vec<HotelResponse> =
        state.read(|hub| Ok(hub.list_hotels().iter().map(HotelResponse::from).collect()))?;
    Ok(Json(hotels))
}

/// Rename or relocate a hotel
#[utoipa::path(
    put,
    path = "/api/hotels/{id}",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = HotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = HotelResponse),
        (status = 400, description = "Hotel not found, or empty name or location", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<HotelRequest>,
) -> Result<Json<HotelResponse>, ApiError> {
    let hotel = state.mutate(|hub| {
        hub.update_hotel(id, &body.name, &body.location)
            .map(HotelResponse::from)
    })?;

    info!("Updated hotel {id}");
    Ok(Json(hotel))
}

/// Delete a hotel and every reservation made in it
#[utoipa::path(
    delete,
    path = "/api/hotels/{id}",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 400, description = "Hotel not found", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.mutate(|hub| hub.delete_hotel(id))?;

    info!("Deleted hotel {id}");
    Ok(StatusCode::NO_CONTENT)
}
