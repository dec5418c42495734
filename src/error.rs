use crate::services::extract_service::ExtractError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => {
                tracing::debug!(message = %msg, "Request validation failed");
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::Extract(e) => {
                tracing::debug!(error = %e, "Spreadsheet extraction failed");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
