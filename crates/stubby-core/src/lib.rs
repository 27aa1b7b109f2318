//! Core types and traits for the Stubby URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage,
//! generator, shortener and gateway crates.

pub mod error;
pub mod repository;
pub mod shortcode;

pub use error::{CoreError, StorageError};
pub use repository::{UrlEntry, UrlStore};
pub use shortcode::ShortCode;
