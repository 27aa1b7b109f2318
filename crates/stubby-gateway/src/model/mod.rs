mod health;
mod url;

pub use health::{ApiHealthResponse, HealthResponse};
pub use url::{ErrorResponse, ShortenRequest, ShortenResponse};
