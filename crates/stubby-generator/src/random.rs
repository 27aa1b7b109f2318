use crate::Generator;
use std::iter;
use stubby_core::shortcode::{ALPHABET, LENGTH};
use stubby_core::ShortCode;

/// Draws short codes uniformly at random from the alphanumeric alphabet.
///
/// With 62^6 (about 56.8 billion) possible codes, collisions are rare, but
/// they do happen; callers retry on conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let code: String =
            iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
                .take(LENGTH)
                .collect();
        ShortCode::new_unchecked(code)
    }
}
