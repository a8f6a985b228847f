use crate::error::CombinationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde_json::json;
use utoipa::ToSchema;

// Anyhow error handling with axum
// https://github.com/tokio-rs/axum/blob/d3112a40d55f123bc5e65f995e2068e245f12055/examples/anyhow-error-response/src/main.rs
#[derive(Debug, ToSchema)]
pub enum AppError {
    #[schema(example = "Internal Server Error", value_type = String)]
    InternalServerError(anyhow::Error),
    #[schema(example = "Bad Request", value_type = String)]
    BadRequest(anyhow::Error),
    #[schema(example = "Not Found", value_type = String)]
    NotFound(anyhow::Error),
    #[schema(
        example = "Please enter at least one attribute with values.",
        value_type = String
    )]
    Warning(String),
    #[schema(example = "Spreadsheet serialization failed", value_type = String)]
    SerializationFailure(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, key, message) = match self {
            AppError::InternalServerError(error) => {
                tracing::error!("Internal Server Error: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(error) => (StatusCode::BAD_REQUEST, "error", error.to_string()),
            AppError::NotFound(error) => (StatusCode::NOT_FOUND, "error", error.to_string()),
            AppError::Warning(message) => (StatusCode::UNPROCESSABLE_ENTITY, "warning", message),
            AppError::SerializationFailure(error) => {
                tracing::error!("Export failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    error.to_string(),
                )
            }
        };
        let body = Json(json!({ key: message }));
        (status, body).into_response()
    }
}
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

impl AppError {
    pub fn bad_request(err: impl Into<anyhow::Error>) -> Self {
        Self::BadRequest(err.into())
    }

    pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Self {
        Self::InternalServerError(err.into())
    }

    pub fn not_found(err: impl Into<anyhow::Error>) -> Self {
        Self::NotFound(err.into())
    }

    /// Input the user can correct is a warning, export errors are surfaced verbatim.
    pub fn from_combination_error(err: CombinationError) -> Self {
        if err.is_serialization_failure() {
            Self::SerializationFailure(err.into())
        } else {
            Self::Warning(err.to_string())
        }
    }
}
