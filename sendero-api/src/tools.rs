use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use sendero_order::{ToolCall, ToolDefinition, ToolRegistry, ToolResult};
use crate::error::AppError;
use crate::state::AppState;

/// Callback surface for the agent service's tool calls
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/invoke", post(invoke_tool))
}

async fn list_tools() -> Json<Vec<ToolDefinition>> {
    Json(ToolRegistry::definitions())
}

async fn invoke_tool(
    State(state): State<AppState>,
    Json(call): Json<ToolCall>,
) -> Result<Json<ToolResult>, AppError> {
    Ok(Json(state.tools.invoke(call).await?))
}
