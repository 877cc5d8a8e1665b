//! Operating-system CSPRNG.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use super::SecureRandomSource;

/// Draws straight from the kernel via `OsRng`. Holds no state of its own, so
/// there is nothing to seed and nothing to wipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        OsRng.gen_range(0..n)
    }

    #[inline]
    fn shuffle(&mut self, items: &mut [char]) {
        items.shuffle(&mut OsRng);
    }
}
