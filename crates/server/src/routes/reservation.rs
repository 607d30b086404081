use axum::{Json, extract::State, http::StatusCode};
use log::info;

use crate::{
    dtos::reservation::{ReservationRequest, ReservationResponse},
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// Book a free room for a guest
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created, room marked as booked", body = ReservationResponse),
        (status = 400, description = "Empty guest name, hotel or room not found, or room already booked", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let reservation = state.mutate(|hub| {
        hub.create_reservation(body.hotel_id, body.room_id, &body.guest_name)
            .map(ReservationResponse::from)
    })?;

    info!(
        "Created reservation {} for room {} of hotel {}",
        reservation.id, reservation.room_id, reservation.hotel_id
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// List every reservation
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "All reservations in creation order", body = [ReservationResponse])
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations: Vec<ReservationResponse> = state.read(|hub| {
        Ok(hub
            .list_reservations()
            .iter()
            .map(ReservationResponse::from)
            .collect())
    })?;
    Ok(Json(reservations))
}

/// Reassign a reservation's hotel, room and guest.
///
/// Booked flags are left untouched on both the old and the new room.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Reservation, hotel or room not found", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<ReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = state.mutate(|hub| {
        hub.update_reservation(id, body.hotel_id, body.room_id, &body.guest_name)
            .map(ReservationResponse::from)
    })?;

    info!("Updated reservation {id}");
    Ok(Json(reservation))
}

/// Cancel a reservation and free its room
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 400, description = "Reservation not found", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.mutate(|hub| hub.delete_reservation(id))?;

    info!("Deleted reservation {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// Record the guest's arrival
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/check-in",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked in", body = ReservationResponse),
        (status = 400, description = "Reservation not found or already checked in", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn check_in(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = state.mutate(|hub| hub.check_in(id).map(ReservationResponse::from))?;

    info!("Guest of reservation {id} checked in");
    Ok(Json(reservation))
}

/// Record the guest's departure and free the room
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/check-out",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked out", body = ReservationResponse),
        (status = 400, description = "Reservation not found, not checked in, or already checked out", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn check_out(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = state.mutate(|hub| hub.check_out(id).map(ReservationResponse::from))?;

    info!("Guest of reservation {id} checked out");
    Ok(Json(reservation))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::{app, send};
    use axum::{
        Router,
        http::{Method, StatusCode},
    };
    use serde_json::{Value, json};

    /// Hotel 1 with room 101 (id 1)
    async fn app_with_room() -> Router {
        let app = app();
        send(
            &app,
            Method::POST,
            "/api/hotels",
            Some(json!({ "name": "Hotel Teste", "location": "Localização Teste" })),
        )
        .await;
        send(
            &app,
            Method::POST,
            "/api/hotels/1/rooms",
            Some(json!({ "roomNumber": 101 })),
        )
        .await;
        app
    }

    async fn book(app: &Router, guest: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/reservations",
            Some(json!({ "hotelId": 1, "roomId": 1, "guestName": guest })),
        )
        .await
    }

    async fn room_is_booked(app: &Router) -> bool {
        let (_, rooms) = send(app, Method::GET, "/api/hotels/1/rooms", None).await;
        rooms[0]["isBooked"].as_bool().unwrap()
    }

    #[tokio::test]
    async fn test_create_reservation_then_conflict() {
        let app = app_with_room().await;

        let (status, body) = book(&app, "João Silva").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "hotelId": 1,
                "roomId": 1,
                "guestName": "João Silva",
                "checkIn": null,
                "checkOut": null
            })
        );
        assert!(room_is_booked(&app).await);

        let (status, body) = book(&app, "Maria Silva").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Room is already booked." }));
    }

    #[tokio::test]
    async fn test_create_reservation_with_missing_fields() {
        let app = app_with_room().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/reservations",
            Some(json!({ "hotelId": 1, "roomId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Guest name is invalid." }));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/reservations",
            Some(json!({ "guestName": "Cliente" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Hotel not found." }));
    }

    #[tokio::test]
    async fn test_list_update_and_delete_reservation() {
        let app = app_with_room().await;
        book(&app, "João Silva").await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/reservations/1",
            Some(json!({ "hotelId": 1, "roomId": 1, "guestName": "Maria Silva" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["guestName"], "Maria Silva");

        let (status, body) = send(&app, Method::GET, "/api/reservations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, "/api/reservations/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(!room_is_booked(&app).await);

        let (_, body) = send(&app, Method::GET, "/api/reservations", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_delete_hotel_removes_its_reservations() {
        let app = app_with_room().await;
        book(&app, "Cliente 1").await;

        send(&app, Method::DELETE, "/api/hotels/1", None).await;

        let (_, body) = send(&app, Method::GET, "/api/reservations", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_check_in_and_check_out() {
        let app = app_with_room().await;
        book(&app, "João Silva").await;

        let (status, body) = send(&app, Method::POST, "/api/reservations/1/check-out", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Guest hasn't checked in yet." }));

        let (status, body) = send(&app, Method::POST, "/api/reservations/1/check-in", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["checkIn"].is_string());
        assert!(body["checkOut"].is_null());

        let (status, body) = send(&app, Method::POST, "/api/reservations/1/check-in", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Guest has already checked in." }));

        let (status, body) = send(&app, Method::POST, "/api/reservations/1/check-out", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["checkOut"].is_string());
        assert!(!room_is_booked(&app).await);

        let (status, body) = send(&app, Method::POST, "/api/reservations/1/check-out", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Guest has already checked out." }));
    }

    #[tokio::test]
    async fn test_unknown_reservation() {
        let app = app();

        for (method, uri) in [
            (Method::DELETE, "/api/reservations/5"),
            (Method::POST, "/api/reservations/5/check-in"),
            (Method::POST, "/api/reservations/5/check-out"),
        ] {
            let (status, body) = send(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "message": "Reservation not found." }));
        }
    }
}
