//! HTTP gateway for the Stubby URL shortener.
//!
//! Exposes the shorten, redirect and stats endpoints over JSON, backed by a
//! [`Shortener`](stubby_shortener::Shortener) shared through [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
