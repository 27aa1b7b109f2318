use crate::model::{ApiHealthResponse, HealthResponse};
use axum::Json;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "URL Shortener API",
    })
}

pub async fn api_health_handler() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
    })
}
