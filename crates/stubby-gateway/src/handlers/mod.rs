mod health;
mod url;

pub use health::{api_health_handler, health_handler};
pub use url::{not_found_handler, redirect_handler, shorten_handler, stats_handler};
