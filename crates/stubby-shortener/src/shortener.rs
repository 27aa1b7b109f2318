use crate::error::Result;
use serde::Serialize;
use stubby_core::{ShortCode, UrlEntry};

/// Click statistics for a single short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStats {
    /// The original URL the code redirects to.
    pub url: String,
    /// How many times the code has been followed.
    pub clicks: u64,
    /// Creation time as an ISO-8601 (RFC 3339, UTC) string.
    pub created_at: String,
}

impl From<UrlEntry> for UrlStats {
    fn from(entry: UrlEntry) -> Self {
        Self {
            url: entry.original_url,
            clicks: entry.clicks,
            created_at: entry.created_at.to_string(),
        }
    }
}

pub trait Shortener: Send + Sync + 'static {
    /// Validates `original_url`, allocates a fresh short code for it and
    /// returns that code.
    fn shorten(&self, original_url: &str) -> Result<ShortCode>;

    /// Returns the original URL for a short code without counting a click.
    /// Returns `None` if the code does not exist.
    fn target(&self, code: &ShortCode) -> Option<String>;

    /// Counts one followed redirect. Returns `false` if the code does not
    /// exist.
    fn record_click(&self, code: &ShortCode) -> bool;

    /// Resolves a short code to its original URL, counting one click.
    /// Returns `None` if the code does not exist.
    fn resolve(&self, code: &ShortCode) -> Option<String> {
        let url = self.target(code)?;
        self.record_click(code);
        Some(url)
    }

    /// Returns click statistics for a short code.
    /// Returns `None` if the code does not exist.
    fn stats(&self, code: &ShortCode) -> Option<UrlStats>;
}
