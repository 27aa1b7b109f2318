use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
