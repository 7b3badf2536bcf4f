use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use sendero_core::Reservation;
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TripReservationRequest {
    pub origin: String,
    pub destination: String,
    /// YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct HotelReservationRequest {
    pub checkin_date: String,
    pub checkout_date: String,
    pub hotel: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantReservationRequest {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM or HH:MM:SS
    pub time: String,
    pub restaurant: String,
    pub city: String,
    pub dish: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservations/flight", post(reserve_flight))
        .route("/reservations/bus", post(reserve_bus))
        .route("/reservations/hotel", post(reserve_hotel))
        .route("/reservations/restaurant", post(reserve_restaurant))
}

async fn reserve_flight(
    State(state): State<AppState>,
    Json(req): Json<TripReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .bookings
        .reserve_flight(&req.origin, &req.destination, &req.date)
        .await?;
    Ok(Json(reservation.into()))
}

async fn reserve_bus(
    State(state): State<AppState>,
    Json(req): Json<TripReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .bookings
        .reserve_bus(&req.origin, &req.destination, &req.date)
        .await?;
    Ok(Json(reservation.into()))
}

async fn reserve_hotel(
    State(state): State<AppState>,
    Json(req): Json<HotelReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .bookings
        .reserve_hotel(&req.checkin_date, &req.checkout_date, &req.hotel, &req.city)
        .await?;
    Ok(Json(reservation.into()))
}

async fn reserve_restaurant(
    State(state): State<AppState>,
    Json(req): Json<RestaurantReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let reservation_time = format!("{}T{}", req.date, req.time);
    let reservation = state
        .bookings
        .reserve_restaurant(&reservation_time, &req.restaurant, &req.city, req.dish.as_deref())
        .await?;
    Ok(Json(reservation.into()))
}
