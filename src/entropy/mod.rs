//! Secure random source used by password generation.
//!
//! The generator never reaches for a global RNG. It takes a
//! [`SecureRandomSource`], so production code hands it [`OsRandom`] and tests
//! hand it a scripted double that records every draw.

mod os;

pub use os::OsRandom;

/// Uniform sampling capability backed by a cryptographically secure source.
pub trait SecureRandomSource {
    /// Uniform index in `0..n`. Callers guarantee `n > 0`.
    fn index(&mut self, n: usize) -> usize;

    /// Uniform random permutation of `items`, in place.
    fn shuffle(&mut self, items: &mut [char]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Uniform pick from `items`, `None` when empty.
    fn choose(&mut self, items: &[char]) -> Option<char> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.index(items.len())])
    }
}

/// Human-readable name of the production source.
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}
