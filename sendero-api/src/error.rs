use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sendero_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    UpstreamError(String),
    InternalServerError(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ParseError { .. } | CoreError::ValidationError(_) => {
                AppError::ValidationError(err.to_string())
            }
            CoreError::StoreMissing(_) => AppError::NotFoundError(err.to_string()),
            CoreError::AgentError(_) => AppError::UpstreamError(err.to_string()),
            CoreError::PersistenceError(_) | CoreError::InternalError(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamError(msg) => {
                tracing::error!("Upstream agent error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            },
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_core_errors_map_to_statuses() {
        let parse = CoreError::ParseError { input: "2024-13-40".to_string(), expected: "YYYY-MM-DD" };
        assert_eq!(status_of(parse.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::StoreMissing("trip.json".to_string()).into()), StatusCode::NOT_FOUND);
        assert_eq!(status_of(CoreError::AgentError("timeout".to_string()).into()), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_of(CoreError::PersistenceError("disk full".to_string()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
