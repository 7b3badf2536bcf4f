use sendero_catalog::PricingEngine;
use sendero_core::reservation::{parse_date, parse_date_time};
use sendero_core::{
    CoreError, CoreResult, HotelReservation, Reservation, ReservationKind, ReservationRepository,
    RestaurantReservation, TripReservation, TripType, DISH_NOT_SPECIFIED,
};
use std::sync::Arc;
use tracing::info;

/// Creates reservations: parses the requested dates, quotes a cost and
/// persists the record before handing it back.
pub struct BookingService {
    repository: Arc<dyn ReservationRepository>,
    pricing: PricingEngine,
}

impl BookingService {
    pub fn new(repository: Arc<dyn ReservationRepository>, pricing: PricingEngine) -> Self {
        Self { repository, pricing }
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// `date` is `YYYY-MM-DD`
    pub async fn reserve_flight(&self, origin: &str, destination: &str, date: &str) -> CoreResult<TripReservation> {
        self.reserve_trip(TripType::Flight, origin, destination, date).await
    }

    /// `date` is `YYYY-MM-DD`
    pub async fn reserve_bus(&self, origin: &str, destination: &str, date: &str) -> CoreResult<TripReservation> {
        self.reserve_trip(TripType::Bus, origin, destination, date).await
    }

    async fn reserve_trip(
        &self,
        trip_type: TripType,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> CoreResult<TripReservation> {
        let date = parse_date(date)?;
        let kind = match trip_type {
            TripType::Flight => ReservationKind::Flight,
            TripType::Bus => ReservationKind::Bus,
        };

        info!("Reserving {} from {} to {} on {}", kind, origin, destination, date);
        let reservation = TripReservation {
            trip_type,
            departure: origin.to_string(),
            destination: destination.to_string(),
            date,
            cost: self.pricing.quote(kind),
        };

        self.persist(reservation).await
    }

    /// Check-out may fall on the check-in day but not before it.
    pub async fn reserve_hotel(
        &self,
        checkin: &str,
        checkout: &str,
        hotel_name: &str,
        city: &str,
    ) -> CoreResult<HotelReservation> {
        let checkin_date = parse_date(checkin)?;
        let checkout_date = parse_date(checkout)?;
        if checkout_date < checkin_date {
            return Err(CoreError::ValidationError(format!(
                "checkout date {} is before checkin date {}",
                checkout_date, checkin_date
            )));
        }

        info!("Reserving hotel at {} in {} from {} to {}", hotel_name, city, checkin_date, checkout_date);
        let reservation = HotelReservation {
            checkin_date,
            checkout_date,
            hotel_name: hotel_name.to_string(),
            city: city.to_string(),
            cost: self.pricing.quote(ReservationKind::Hotel),
        };

        self.persist(reservation).await
    }

    /// `reservation_time` is `YYYY-MM-DDTHH:MM:SS`. A missing or blank dish
    /// is recorded as "not specified".
    pub async fn reserve_restaurant(
        &self,
        reservation_time: &str,
        restaurant: &str,
        city: &str,
        dish: Option<&str>,
    ) -> CoreResult<RestaurantReservation> {
        let reservation_time = parse_date_time(reservation_time)?;
        let dish = dish
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DISH_NOT_SPECIFIED);

        info!("Reserving table at {} in {} at {}", restaurant, city, reservation_time);
        let reservation = RestaurantReservation {
            reservation_time,
            restaurant: restaurant.to_string(),
            city: city.to_string(),
            dish: dish.to_string(),
            cost: self.pricing.quote(ReservationKind::Restaurant),
        };

        self.persist(reservation).await
    }

    async fn persist<R>(&self, record: R) -> CoreResult<R>
    where
        R: Clone + Into<Reservation>,
    {
        let reservation: Reservation = record.clone().into();
        self.repository.append(&reservation).await?;
        info!("Reservation saved: {} ({})", reservation.type_label(), reservation.cost());
        Ok(record)
    }
}
