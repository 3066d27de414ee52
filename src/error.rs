use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the currency service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested currency code is not in the store.
    #[error("Currency {0} is not available.")]
    CurrencyNotFound(String),

    /// The update log has no entries yet.
    #[error("Last update time not found.")]
    NoUpdateHistory,

    /// The rates provider call failed (transport error or non-success status).
    #[error("exchange rates request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The provider body did not match the expected shape.
    #[error("The response from the API does not contain 'rates'. Response was: {0}")]
    MalformedResponse(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CurrencyNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::NoUpdateHistory => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::MalformedResponse(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
