//! URL shortener service implementation.
//!
//! This crate ties a [`UrlStore`](stubby_core::UrlStore) and a
//! [`Generator`](stubby_generator::Generator) together: it validates target
//! URLs, allocates unique short codes, resolves redirects while counting
//! clicks, and reports per-code stats.

pub mod error;
pub mod service;
pub mod shortener;
pub mod validate;

pub use error::{Result, ShortenerError};
pub use service::ShortenerService;
pub use shortener::{Shortener, UrlStats};
