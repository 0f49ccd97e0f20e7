//! Random key source for filling a tree.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyGenError {
    #[error("empty key range: min {min} is greater than max {max}")]
    EmptyRange { min: i64, max: i64 },
}

/// Draws `count` keys uniformly from the inclusive range `[min, max]`.
/// The same key may be drawn more than once.
pub fn random_keys<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, KeyGenError> {
    if min > max {
        return Err(KeyGenError::EmptyRange { min, max });
    }
    Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
}
