use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stubby_shortener::ShortenerError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL is required in request body.")]
    MissingUrl,
    #[error("Invalid URL provided.")]
    InvalidUrl(String),
    #[error("Resource not found.")]
    NotFound,
    #[error("Internal server error.")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::InvalidUrl(reason) => AppError::InvalidUrl(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidUrl(reason) => debug!(%reason, "rejected url"),
            AppError::Internal(reason) => error!(%reason, "request failed"),
            AppError::MissingUrl | AppError::NotFound => {}
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
