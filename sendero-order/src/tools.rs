use crate::booking::BookingService;
use crate::summary::TripSummarizer;
use sendero_core::{CoreError, CoreResult, Reservation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Tool description handed to the agent
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

/// A tool call issued by the agent. `arguments` may be a JSON object or a
/// string containing one.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct TripArgs {
    destination: String,
    origin: String,
    date_str: String,
}

#[derive(Debug, Deserialize)]
struct HotelArgs {
    checkin_str: String,
    checkout_str: String,
    hotel_name: String,
    city: String,
}

#[derive(Debug, Deserialize)]
struct RestaurantArgs {
    reservation_time_str: String,
    restaurant: String,
    city: String,
    dish: Option<String>,
}

/// Exposes the booking operations and the trip summary as agent tools
pub struct ToolRegistry {
    bookings: Arc<BookingService>,
    summarizer: Arc<TripSummarizer>,
}

impl ToolRegistry {
    pub fn new(bookings: Arc<BookingService>, summarizer: Arc<TripSummarizer>) -> Self {
        Self { bookings, summarizer }
    }

    pub fn definitions() -> Vec<ToolDefinition> {
        let trip_params = json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string", "description": "Target city" },
                "origin": { "type": "string", "description": "Departure city" },
                "date_str": { "type": "string", "description": "Travel date (format: YYYY-MM-DD)" }
            },
            "required": ["destination", "origin", "date_str"]
        });

        vec![
            ToolDefinition {
                name: "reserve_flight",
                description: "Books a flight given the destination, origin and flight date. \
                    The reservation is saved for future reference. Use when the user asks to book a flight.",
                parameters: trip_params.clone(),
            },
            ToolDefinition {
                name: "reserve_bus",
                description: "Books a bus trip given the trip date, origin and destination. \
                    The reservation is saved for future reference. Use when the user asks to book a bus trip.",
                parameters: trip_params,
            },
            ToolDefinition {
                name: "reserve_hotel",
                description: "Reserves a hotel stay given check-in and check-out dates, hotel name and city. \
                    Use when the user asks to book a hotel.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "checkin_str": { "type": "string", "description": "Check-in date (format: YYYY-MM-DD)" },
                        "checkout_str": { "type": "string", "description": "Check-out date (format: YYYY-MM-DD)" },
                        "hotel_name": { "type": "string", "description": "Hotel name" },
                        "city": { "type": "string", "description": "City where the hotel is located" }
                    },
                    "required": ["checkin_str", "checkout_str", "hotel_name", "city"]
                }),
            },
            ToolDefinition {
                name: "reserve_restaurant",
                description: "Reserves a restaurant table given the date and time, restaurant name and city, \
                    optionally with the dish the user wants. Use when the user asks to book a restaurant.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "reservation_time_str": { "type": "string", "description": "Reservation time (format: YYYY-MM-DDTHH:MM:SS)" },
                        "restaurant": { "type": "string", "description": "Restaurant name" },
                        "city": { "type": "string", "description": "City where the restaurant is located" },
                        "dish": { "type": "string", "description": "Dish the user wants to order" }
                    },
                    "required": ["reservation_time_str", "restaurant", "city"]
                }),
            },
            ToolDefinition {
                name: "trip_summary",
                description: "Summarizes the user's trip from the stored reservations: activities by city \
                    and date plus the total cost.",
                parameters: json!({ "type": "object", "properties": {} }),
            },
        ]
    }

    pub async fn invoke(&self, call: ToolCall) -> CoreResult<ToolResult> {
        info!("Agent tool call: {}", call.name);
        let arguments = call.arguments;

        let content = match call.name.as_str() {
            "reserve_flight" => {
                let args: TripArgs = decode_arguments(arguments)?;
                let reservation = self.bookings.reserve_flight(&args.origin, &args.destination, &args.date_str).await?;
                to_json(&Reservation::from(reservation))?
            }
            "reserve_bus" => {
                let args: TripArgs = decode_arguments(arguments)?;
                let reservation = self.bookings.reserve_bus(&args.origin, &args.destination, &args.date_str).await?;
                to_json(&Reservation::from(reservation))?
            }
            "reserve_hotel" => {
                let args: HotelArgs = decode_arguments(arguments)?;
                let reservation = self
                    .bookings
                    .reserve_hotel(&args.checkin_str, &args.checkout_str, &args.hotel_name, &args.city)
                    .await?;
                to_json(&Reservation::from(reservation))?
            }
            "reserve_restaurant" => {
                let args: RestaurantArgs = decode_arguments(arguments)?;
                let reservation = self
                    .bookings
                    .reserve_restaurant(&args.reservation_time_str, &args.restaurant, &args.city, args.dish.as_deref())
                    .await?;
                to_json(&Reservation::from(reservation))?
            }
            "trip_summary" => self.summarizer.summarize().await?,
            other => return Err(CoreError::ValidationError(format!("Unknown tool '{}'", other))),
        };

        Ok(ToolResult { name: call.name, content })
    }
}

fn decode_arguments<T: DeserializeOwned>(arguments: Value) -> CoreResult<T> {
    let arguments = match arguments {
        Value::String(raw) => serde_json::from_str(&raw)
            .map_err(|e| CoreError::ValidationError(format!("Tool arguments are not valid JSON: {}", e)))?,
        other => other,
    };

    serde_json::from_value(arguments)
        .map_err(|e| CoreError::ValidationError(format!("Invalid tool arguments: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> CoreResult<String> {
    serde_json::to_string(value).map_err(|e| CoreError::InternalError(e.to_string()))
}
