pub mod reservation;
pub mod repository;
pub mod agent;

pub use reservation::{
    HotelReservation, Reservation, ReservationKind, RestaurantReservation, TripReservation, TripType,
    DISH_NOT_SPECIFIED,
};
pub use repository::ReservationRepository;
pub use agent::TravelAgent;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date/time '{input}': expected format {expected}")]
    ParseError { input: String, expected: &'static str },
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("No reservations have been recorded yet ({0} does not exist)")]
    StoreMissing(String),
    #[error("Failed to persist reservation: {0}")]
    PersistenceError(String),
    #[error("Agent request failed: {0}")]
    AgentError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
