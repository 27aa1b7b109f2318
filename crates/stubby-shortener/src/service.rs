use crate::error::Result;
use crate::shortener::{Shortener, UrlStats};
use crate::validate::validate_url;
use std::sync::Arc;
use stubby_core::{ShortCode, StorageError, UrlStore};
use stubby_generator::Generator;
use tracing::{debug, info, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `UrlStore` and a `Generator` to handle:
/// - URL validation
/// - Short code allocation with collision retry
/// - Click counting on resolve
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<S: UrlStore, G: Generator> ShortenerService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self::from_shared(Arc::new(store), Arc::new(generator))
    }

    /// Creates a service over a store that is also held elsewhere.
    pub fn from_shared(store: Arc<S>, generator: Arc<G>) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Draws candidates until one is inserted.
    ///
    /// `try_add` checks and inserts under one lock, so two concurrent callers
    /// can never both claim the same code.
    fn allocate(&self, original_url: &str) -> ShortCode {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let code: ShortCode = self.generator.generate().into();
            match self.store.try_add(&code, original_url) {
                Ok(_) => {
                    trace!(code = %code, attempts, "allocated short code");
                    return code;
                }
                Err(StorageError::Conflict(_)) => {
                    debug!(code = %code, attempts, "short code collision, drawing again");
                }
            }
        }
    }
}

impl<S: UrlStore, G: Generator> Shortener for ShortenerService<S, G> {
    fn shorten(&self, original_url: &str) -> Result<ShortCode> {
        validate_url(original_url)?;

        let code = self.allocate(original_url);
        info!(code = %code, url = %original_url, "shortened url");
        Ok(code)
    }

    fn target(&self, code: &ShortCode) -> Option<String> {
        let Some(entry) = self.store.lookup(code) else {
            trace!(code = %code, "short code not found");
            return None;
        };

        debug!(code = %code, url = %entry.original_url, "resolved short code");
        Some(entry.original_url)
    }

    fn record_click(&self, code: &ShortCode) -> bool {
        self.store.increment_clicks(code)
    }

    fn stats(&self, code: &ShortCode) -> Option<UrlStats> {
        self.store.lookup(code).map(UrlStats::from)
    }
}
