use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use stubby_core::ShortCode;
use stubby_shortener::validate::redirect_location;
use stubby_shortener::UrlStats;

/// A path segment that is not a well-formed short code can never be stored.
fn parse_code(raw: &str) -> Result<ShortCode> {
    raw.parse().map_err(|_| AppError::NotFound)
}

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let Ok(Json(ShortenRequest { url: Some(url) })) = payload else {
        return Err(AppError::MissingUrl);
    };

    let code = state.shortener().shorten(&url)?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: code.to_url(state.base_url()),
            short_code: code.to_string(),
        }),
    ))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = parse_code(&short_code)?;
    let url = state.shortener().target(&code).ok_or(AppError::NotFound)?;

    // Build the header first so a failed redirect is never counted.
    let location = HeaderValue::from_str(&redirect_location(&url))
        .map_err(|e| AppError::Internal(format!("unusable redirect target {url:?}: {e}")))?;
    state.shortener().record_click(&code);

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

pub async fn stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlStats>> {
    let code = parse_code(&short_code)?;
    let stats = state.shortener().stats(&code).ok_or(AppError::NotFound)?;
    Ok(Json(stats))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
