use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use vitrine_types::api::FieldError;

/// Everything a handler can fail with, mapped onto the HTTP surface in
/// one place. Storage variants keep the underlying error for the logs;
/// clients only ever see a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("admin credentials not configured")]
    Misconfigured,

    #[error("error saving data: {0}")]
    Save(anyhow::Error),

    #[error("error retrieving data: {0}")]
    Load(anyhow::Error),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
                .into_response(),
            ApiError::Misconfigured => {
                error!("Admin credentials not configured in environment");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server configuration error" })),
                )
                    .into_response()
            }
            ApiError::Save(e) => {
                error!("Error inserting data: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error saving data" })),
                )
                    .into_response()
            }
            ApiError::Load(e) => {
                error!("Error retrieving data: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error retrieving data" })),
                )
                    .into_response()
            }
            ApiError::Internal(e) => {
                error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
