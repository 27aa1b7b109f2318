pub mod random;

pub use random::RandomGenerator;

use stubby_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated code is only a candidate: uniqueness is decided by the store
/// when the code is inserted.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Draws the next candidate short code.
    fn generate(&self) -> Self::Output;
}
