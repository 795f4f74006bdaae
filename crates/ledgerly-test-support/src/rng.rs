//! Test RNG — deterministic `TokenRng` implementation for tests.

use ledgerly_core::rng::TokenRng;

/// An RNG that fills buffers by cycling through a predetermined byte
/// sequence. Two instances built from the same bytes produce the same tokens.
#[derive(Debug)]
pub struct SequenceTokenRng {
    bytes: Vec<u8>,
    index: usize,
}

impl SequenceTokenRng {
    /// Create a new `SequenceTokenRng` cycling through `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        assert!(!bytes.is_empty(), "SequenceTokenRng needs at least one byte");
        Self { bytes, index: 0 }
    }
}

impl TokenRng for SequenceTokenRng {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for slot in dest {
            *slot = self.bytes[self.index % self.bytes.len()];
            self.index += 1;
        }
    }
}
