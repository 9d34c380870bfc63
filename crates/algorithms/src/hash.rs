//! SHA-2 digest selection
//!
//! Signatures and the envelope KDF pick their digest at runtime, so the hash
//! is an enum over the `sha2` implementations rather than a type parameter.

use sha2::{Digest, Sha256, Sha384, Sha512};

/// Supported SHA-2 variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Digest matched to the curve size: SHA-256 up to 256-bit fields,
    /// SHA-384 up to 384 bits, SHA-512 beyond
    pub fn for_field_bits(bits: u64) -> Self {
        match bits {
            0..=256 => HashAlgorithm::Sha256,
            257..=384 => HashAlgorithm::Sha384,
            _ => HashAlgorithm::Sha512,
        }
    }

    /// Digest length in bytes
    pub fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// One-shot digest
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        self.digest_chunks(&[data])
    }

    /// Digest of the concatenation of `chunks`
    pub fn digest_chunks(self, chunks: &[&[u8]]) -> Vec<u8> {
        fn run<D: Digest>(chunks: &[&[u8]]) -> Vec<u8> {
            let mut hasher = D::new();
            for chunk in chunks {
                hasher.update(chunk);
            }
            hasher.finalize().to_vec()
        }
        match self {
            HashAlgorithm::Sha256 => run::<Sha256>(chunks),
            HashAlgorithm::Sha384 => run::<Sha384>(chunks),
            HashAlgorithm::Sha512 => run::<Sha512>(chunks),
        }
    }
}
