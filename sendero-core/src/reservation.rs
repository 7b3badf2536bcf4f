use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, CoreResult};

/// Recorded when a restaurant booking does not name a dish.
pub const DISH_NOT_SPECIFIED: &str = "not specified";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Pricing category of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReservationKind {
    Flight,
    Bus,
    Hotel,
    Restaurant,
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReservationKind::Flight => "flight",
            ReservationKind::Bus => "bus",
            ReservationKind::Hotel => "hotel",
            ReservationKind::Restaurant => "restaurant",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Flight,
    Bus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripReservation {
    pub trip_type: TripType,
    pub departure: String,
    pub destination: String,
    pub date: NaiveDate,
    pub cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelReservation {
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub hotel_name: String,
    pub city: String,
    pub cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantReservation {
    pub reservation_time: NaiveDateTime,
    pub restaurant: String,
    pub city: String,
    #[serde(default = "default_dish")]
    pub dish: String,
    pub cost: u32,
}

fn default_dish() -> String {
    DISH_NOT_SPECIFIED.to_string()
}

/// A persisted booking. The `reservation_type` field carries the variant tag
/// so every stored record is self-describing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "reservation_type")]
pub enum Reservation {
    #[serde(rename = "TripReservation")]
    Trip(TripReservation),
    #[serde(rename = "HotelReservation")]
    Hotel(HotelReservation),
    #[serde(rename = "RestaurantReservation")]
    Restaurant(RestaurantReservation),
}

impl Reservation {
    pub fn kind(&self) -> ReservationKind {
        match self {
            Reservation::Trip(trip) => match trip.trip_type {
                TripType::Flight => ReservationKind::Flight,
                TripType::Bus => ReservationKind::Bus,
            },
            Reservation::Hotel(_) => ReservationKind::Hotel,
            Reservation::Restaurant(_) => ReservationKind::Restaurant,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            Reservation::Trip(r) => r.cost,
            Reservation::Hotel(r) => r.cost,
            Reservation::Restaurant(r) => r.cost,
        }
    }

    /// Key used to group records in the trip summary: trips are filed under
    /// their departure city, stays and meals under the city they take place in.
    pub fn location(&self) -> &str {
        match self {
            Reservation::Trip(r) => &r.departure,
            Reservation::Hotel(r) => &r.city,
            Reservation::Restaurant(r) => &r.city,
        }
    }

    pub fn date_label(&self) -> String {
        match self {
            Reservation::Trip(r) => r.date.format(DATE_FORMAT).to_string(),
            Reservation::Hotel(r) => r.checkin_date.format(DATE_FORMAT).to_string(),
            Reservation::Restaurant(r) => r.reservation_time.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Same string as the serialized `reservation_type` tag.
    pub fn type_label(&self) -> &'static str {
        match self {
            Reservation::Trip(_) => "TripReservation",
            Reservation::Hotel(_) => "HotelReservation",
            Reservation::Restaurant(_) => "RestaurantReservation",
        }
    }
}

impl From<TripReservation> for Reservation {
    fn from(r: TripReservation) -> Self {
        Reservation::Trip(r)
    }
}

impl From<HotelReservation> for Reservation {
    fn from(r: HotelReservation) -> Self {
        Reservation::Hotel(r)
    }
}

impl From<RestaurantReservation> for Reservation {
    fn from(r: RestaurantReservation) -> Self {
        Reservation::Restaurant(r)
    }
}

// `d` marks a digit, every other byte must match literally
fn has_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            _ => c == s,
        })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    let err = || CoreError::ParseError {
        input: input.to_string(),
        expected: "YYYY-MM-DD",
    };
    if !has_shape(input, "dddd-dd-dd") {
        return Err(err());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| err())
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` date-time. Seconds may be omitted.
pub fn parse_date_time(input: &str) -> CoreResult<NaiveDateTime> {
    let err = || CoreError::ParseError {
        input: input.to_string(),
        expected: "YYYY-MM-DDTHH:MM:SS",
    };
    let format = if has_shape(input, "dddd-dd-ddTdd:dd:dd") {
        DATE_TIME_FORMAT
    } else if has_shape(input, "dddd-dd-ddTdd:dd") {
        DATE_TIME_FORMAT_NO_SECONDS
    } else {
        return Err(err());
    };
    NaiveDateTime::parse_from_str(input, format).map_err(|_| err())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Reservation {
        Reservation::Trip(TripReservation {
            trip_type: TripType::Flight,
            departure: "La Paz".to_string(),
            destination: "Sucre".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 20).unwrap(),
            cost: 350,
        })
    }

    #[test]
    fn test_trip_serializes_with_discriminant() {
        let value = serde_json::to_value(flight()).unwrap();
        assert_eq!(value["reservation_type"], "TripReservation");
        assert_eq!(value["trip_type"], "flight");
        assert_eq!(value["departure"], "La Paz");
        assert_eq!(value["date"], "2024-10-20");
        assert_eq!(value["cost"], 350);
    }

    #[test]
    fn test_restaurant_time_format_and_default_dish() {
        let raw = serde_json::json!({
            "reservation_type": "RestaurantReservation",
            "reservation_time": "2024-10-21T19:30:00",
            "restaurant": "Gustu",
            "city": "La Paz",
            "cost": 120
        });
        let reservation: Reservation = serde_json::from_value(raw).unwrap();
        let Reservation::Restaurant(ref r) = reservation else {
            panic!("expected restaurant, got {:?}", reservation);
        };
        assert_eq!(r.dish, DISH_NOT_SPECIFIED);
        assert_eq!(reservation.date_label(), "2024-10-21T19:30:00");
        assert_eq!(serde_json::to_value(&reservation).unwrap()["reservation_time"], "2024-10-21T19:30:00");
    }

    #[test]
    fn test_accessors_per_variant() {
        let hotel = Reservation::Hotel(HotelReservation {
            checkin_date: NaiveDate::from_ymd_opt(2024, 10, 20).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2024, 10, 23).unwrap(),
            hotel_name: "Hotel Parador".to_string(),
            city: "Sucre".to_string(),
            cost: 800,
        });

        assert_eq!(flight().location(), "La Paz");
        assert_eq!(flight().kind(), ReservationKind::Flight);
        assert_eq!(flight().type_label(), "TripReservation");
        assert_eq!(hotel.location(), "Sucre");
        assert_eq!(hotel.date_label(), "2024-10-20");
        assert_eq!(hotel.kind(), ReservationKind::Hotel);
        assert_eq!(hotel.cost(), 800);
    }

    #[test]
    fn test_parse_date_rejects_invalid_calendar_values() {
        assert!(parse_date("2024-10-20").is_ok());
        assert!(matches!(parse_date("2024-13-40"), Err(CoreError::ParseError { .. })));
        assert!(matches!(parse_date("20/10/2024"), Err(CoreError::ParseError { .. })));
    }

    #[test]
    fn test_parse_date_time_accepts_missing_seconds() {
        let full = parse_date_time("2024-10-21T19:30:00").unwrap();
        let short = parse_date_time("2024-10-21T19:30").unwrap();
        assert_eq!(full, short);
        assert!(parse_date_time("2024-10-21").is_err());
    }

    #[test]
    fn test_non_canonical_inputs_are_rejected() {
        for input in ["2024-1-5", "+2024-10-20", " 2024-10-20 ", "2024-10-20 ", "２０２４-10-20"] {
            assert!(matches!(parse_date(input), Err(CoreError::ParseError { .. })), "accepted {:?}", input);
        }
        for input in ["2024-10-21T9:3:0", " 2024-10-21T19:30:00", "2024-10-21 19:30:00", "+2024-10-21T19:30"] {
            assert!(matches!(parse_date_time(input), Err(CoreError::ParseError { .. })), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_unknown_discriminant_is_rejected() {
        let raw = serde_json::json!({ "reservation_type": "CarRental", "cost": 10 });
        assert!(serde_json::from_value::<Reservation>(raw).is_err());
    }
}
