use crate::error::StorageError;
use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// The short code this entry is registered under.
    pub code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
    /// How many times the short code has been followed.
    pub clicks: u64,
    /// When the entry was created. Never changes afterwards.
    pub created_at: Timestamp,
}

impl UrlEntry {
    /// Creates a fresh entry with no clicks, stamped with the current time.
    pub fn new(code: ShortCode, original_url: impl Into<String>) -> Self {
        Self {
            code,
            original_url: original_url.into(),
            clicks: 0,
            created_at: Timestamp::now(),
        }
    }
}

/// A registry mapping short codes to URL entries.
///
/// Every operation is atomic with respect to every other operation on the
/// same store; implementations must be safe to share across threads.
/// None of the operations perform I/O, so the trait is synchronous.
pub trait UrlStore: Send + Sync + 'static {
    /// Inserts a new entry with zero clicks.
    ///
    /// The caller guarantees `code` is not already present. If it is, the
    /// prior entry is overwritten. Prefer [`UrlStore::try_add`] when the
    /// code was not reserved beforehand.
    fn add(&self, code: &ShortCode, original_url: &str);

    /// Inserts a new entry only if `code` is free.
    ///
    /// The uniqueness check and the insert happen as one atomic step.
    /// Returns `Err(Conflict)` and leaves the existing entry untouched if the
    /// code is taken.
    fn try_add(&self, code: &ShortCode, original_url: &str) -> Result<UrlEntry, StorageError>;

    /// Retrieves a snapshot of the entry for a given short code.
    /// Returns `None` if the code does not exist.
    fn lookup(&self, code: &ShortCode) -> Option<UrlEntry>;

    /// Increments the click counter of an entry.
    /// Returns `false` if the code does not exist.
    fn increment_clicks(&self, code: &ShortCode) -> bool;

    /// Checks whether a short code is already registered.
    fn is_code_taken(&self, code: &ShortCode) -> bool;

    /// Number of registered entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
