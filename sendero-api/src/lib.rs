use axum::{
    routing::get,
    Router,
    http::Method,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod prompts;
pub mod recommendations;
pub mod reservations;
pub mod state;
pub mod summary_handler;
pub mod tools;

pub use prompts::PromptBook;
pub use state::AppState;

/// Envelope shared by the agent-backed endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentApiResponse {
    pub status: String,
    pub agent_response: String,
}

impl AgentApiResponse {
    pub fn ok(agent_response: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            agent_response: agent_response.into(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(recommendations::routes())
        .merge(reservations::routes())
        .merge(summary_handler::routes())
        .merge(tools::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
