use axum::{
    extract::State,
    routing::get,
    Json,
    Router,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use tracing::info;
use crate::error::AppError;
use crate::state::AppState;
use crate::AgentApiResponse;

/// `preferences` may repeat: `?preferences=hiking&preferences=food`
#[derive(Debug, Deserialize)]
pub struct PreferencesQuery {
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations/cities", get(recommend_cities))
        .route("/recommendations/places", get(recommend_places))
        .route("/recommendations/hotels", get(recommend_hotels))
        .route("/recommendations/activities", get(recommend_activities))
}

async fn ask_agent(state: &AppState, prompt: String) -> Result<Json<AgentApiResponse>, AppError> {
    info!("Forwarding recommendation request to agent");
    let response = state.agent.chat(&prompt).await?;
    Ok(Json(AgentApiResponse::ok(response)))
}

async fn recommend_cities(
    State(state): State<AppState>,
    Query(query): Query<PreferencesQuery>,
) -> Result<Json<AgentApiResponse>, AppError> {
    if query.preferences.iter().all(|p| p.trim().is_empty()) {
        return Err(AppError::ValidationError("at least one preference is required".to_string()));
    }
    let prompt = state.prompts.cities(&query.preferences);
    ask_agent(&state, prompt).await
}

async fn recommend_places(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<AgentApiResponse>, AppError> {
    let prompt = state.prompts.places(&query.city, &query.preferences);
    ask_agent(&state, prompt).await
}

async fn recommend_hotels(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<AgentApiResponse>, AppError> {
    let prompt = state.prompts.hotels(&query.city, &query.preferences);
    ask_agent(&state, prompt).await
}

async fn recommend_activities(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<AgentApiResponse>, AppError> {
    let prompt = state.prompts.activities(&query.city, &query.preferences);
    ask_agent(&state, prompt).await
}
