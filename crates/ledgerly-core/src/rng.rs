//! Random byte source for secret tokens.
//!
//! In production this wraps the thread-local CSPRNG. Tests inject a
//! sequence-backed implementation so generated tokens are predictable.

use rand::RngCore;

/// Abstraction over secure random byte generation.
pub trait TokenRng: Send {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Production RNG backed by `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadTokenRng;

impl TokenRng for ThreadTokenRng {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }
}
