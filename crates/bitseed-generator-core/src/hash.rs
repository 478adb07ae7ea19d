//! FNV-1a 32-bit hashing.
//!
//! This is a fast dispersion hash, not a cryptographic one. Its only job is to
//! turn seed material into a reproducible 32-bit digest. Every conforming
//! implementation must produce the same value for the same bytes, so the
//! constants and the byte order of processing are part of the contract.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a byte slice in one pass.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hasher = Fnv1a32::new();
    hasher.update(data);
    hasher.finish()
}

/// Streaming FNV-1a 32-bit state.
///
/// Feeding the same bytes in any number of `update` calls yields the same
/// digest as a single call over their concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a32 {
    state: u32,
}

impl Fnv1a32 {
    /// Start from the offset basis.
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Absorb bytes, left to right.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= u32::from(byte);
            // Wraparound multiplication is part of the algorithm.
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// Current digest value.
    pub const fn finish(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_is_offset_basis() {
        assert_eq!(fnv1a_32(&[]), 0x811c9dc5);
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(fnv1a_32(b"a"), 0xe40c292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9cf968);
        assert_eq!(fnv1a_32(b"abcxyztoken-1"), 0xb2872e19);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(fnv1a_32(b"ab"), fnv1a_32(b"ba"));
    }

    proptest! {
        #[test]
        fn test_streaming_matches_one_shot(
            data in prop::collection::vec(any::<u8>(), 0..256),
            split in any::<prop::sample::Index>(),
        ) {
            let at = split.index(data.len() + 1);
            let mut hasher = Fnv1a32::new();
            hasher.update(&data[..at]);
            hasher.update(&data[at..]);
            prop_assert_eq!(hasher.finish(), fnv1a_32(&data));
        }
    }
}
