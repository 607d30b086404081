use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub mod health;
pub mod hotel;
pub mod reservation;
pub mod room;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/hotels",
            get(hotel::list_hotels).post(hotel::create_hotel),
        )
        .route(
            "/api/hotels/{id}",
            put(hotel::update_hotel).delete(hotel::delete_hotel),
        )
        .route(
            "/api/hotels/{id}/rooms",
            get(room::list_rooms).post(room::add_room),
        )
        .route(
            "/api/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            put(reservation::update_reservation).delete(reservation::delete_reservation),
        )
        .route(
            "/api/reservations/{id}/check-in",
            post(reservation::check_in),
        )
        .route(
            "/api/reservations/{id}/check-out",
            post(reservation::check_out),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use hub::HotelHub;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Router over a fresh store with export disabled
    pub fn app() -> Router {
        super::router(AppState::new(HotelHub::new().into_shared(), None))
    }

    pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
