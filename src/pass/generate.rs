//! Password generation.

use std::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::{self, CharClass, ClassSet};
use super::InvalidRequest;
use crate::entropy::{OsRandom, SecureRandomSource};

/// Longest password a single request may ask for.
pub const MAX_LENGTH: usize = 65_536;

/// What to generate: one password of `length` characters drawn from `classes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
    pub exclude_ambiguous: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet, exclude_ambiguous: bool) -> Self {
        Self {
            length,
            classes,
            exclude_ambiguous,
        }
    }

    /// Build one filtered pool per selected class, rejecting requests that
    /// cannot cover every class.
    pub fn pools(&self) -> Result<Vec<Vec<char>>, InvalidRequest> {
        build_pools(self, |class| class.pool(self.exclude_ambiguous))
    }

    pub fn validate(&self) -> Result<(), InvalidRequest> {
        self.pools().map(|_| ())
    }
}

fn build_pools<F>(request: &GenerationRequest, pool_of: F) -> Result<Vec<Vec<char>>, InvalidRequest>
where
    F: Fn(CharClass) -> Vec<char>,
{
    if request.classes.is_empty() {
        return Err(InvalidRequest::NoClassSelected);
    }

    let mut pools = Vec::with_capacity(request.classes.len());
    for class in request.classes.iter() {
        let pool = pool_of(class);
        if pool.is_empty() {
            return Err(InvalidRequest::EmptyPool { class });
        }
        pools.push(pool);
    }

    if request.length < pools.len() {
        return Err(InvalidRequest::LengthTooShort {
            length: request.length,
            required: pools.len(),
        });
    }
    if request.length > MAX_LENGTH {
        return Err(InvalidRequest::LengthTooLong {
            length: request.length,
            max: MAX_LENGTH,
        });
    }

    Ok(pools)
}

/// A generated password. Wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in characters (all alphabets are ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a single password from the OS CSPRNG.
pub fn generate(request: &GenerationRequest) -> Result<Password, InvalidRequest> {
    generate_with(request, &mut OsRandom)
}

/// Generate a single password from `rng`.
pub fn generate_with<R>(request: &GenerationRequest, rng: &mut R) -> Result<Password, InvalidRequest>
where
    R: SecureRandomSource + ?Sized,
{
    let pools = request.pools()?;
    let alphabet = charset::combined(&pools);
    debug!(
        "generating {} chars from {} pools, combined alphabet {}",
        request.length,
        pools.len(),
        alphabet.len()
    );
    Ok(fill(&pools, &alphabet, request.length, rng))
}

/// Validate once, then generate `count` independent passwords.
/// On error nothing is generated.
pub fn generate_batch<'a, R>(
    request: &GenerationRequest,
    count: usize,
    rng: &'a mut R,
) -> Result<impl Iterator<Item = Password> + use<'a, R>, InvalidRequest>
where
    R: SecureRandomSource + ?Sized,
{
    let pools = request.pools()?;
    let alphabet = charset::combined(&pools);
    let length = request.length;
    debug!("batch of {count}: {length} chars, combined alphabet {}", alphabet.len());
    Ok((0..count).map(move |_| fill(&pools, &alphabet, length, &mut *rng)))
}

/// One guaranteed draw per pool, the rest from `alphabet`, then a shuffle.
/// Pools are validated non-empty and `length >= pools.len()`.
fn fill<R>(pools: &[Vec<char>], alphabet: &[char], length: usize, rng: &mut R) -> Password
where
    R: SecureRandomSource + ?Sized,
{
    let mut chars: Vec<char> = Vec::with_capacity(length);

    for pool in pools {
        chars.push(pool[rng.index(pool.len())]);
    }
    for _ in pools.len()..length {
        chars.push(alphabet[rng.index(alphabet.len())]);
    }

    rng.shuffle(&mut chars);

    let mut out = String::with_capacity(length);
    out.extend(chars.iter());
    chars.zeroize();
    Password(out)
}
