use axum::{
    extract::State,
    routing::get,
    Json,
    Router,
};
use sendero_order::TripSummary;
use crate::error::AppError;
use crate::state::AppState;
use crate::AgentApiResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservations/summary", get(get_trip_summary))
        .route("/reservations/summary/details", get(get_trip_summary_details))
        .route("/trip_summary", get(narrate_trip_summary))
}

/// Rendered report straight from the reservation store
async fn get_trip_summary(State(state): State<AppState>) -> Result<Json<AgentApiResponse>, AppError> {
    let report = state.summarizer.summarize().await?;
    Ok(Json(AgentApiResponse::ok(report)))
}

async fn get_trip_summary_details(State(state): State<AppState>) -> Result<Json<TripSummary>, AppError> {
    Ok(Json(state.summarizer.summarize_structured().await?))
}

/// Asks the agent to fetch the summary through its tool and write a report around it
async fn narrate_trip_summary(State(state): State<AppState>) -> Result<Json<AgentApiResponse>, AppError> {
    let response = state.agent.chat(&state.prompts.trip_summary()).await?;
    Ok(Json(AgentApiResponse::ok(response)))
}
