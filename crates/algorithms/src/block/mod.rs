//! AES block cipher and the CBC mode used by the hybrid envelope
//!
//! The raw block transform comes from the `aes` crate; key length selects the
//! variant at runtime since envelope subkeys are sized by the KDF output.

use std::fmt;

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::error::{Error, Result};

pub mod cbc;

pub use cbc::Cbc;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// A single AES block
pub type Block = [u8; BLOCK_SIZE];

/// AES keyed for one of the three standard key lengths
///
/// Round keys are wiped on drop.
#[derive(Clone)]
pub enum Aes {
    /// 16-byte key
    Aes128(aes::Aes128),
    /// 24-byte key
    Aes192(aes::Aes192),
    /// 32-byte key
    Aes256(aes::Aes256),
}

impl Aes {
    /// Key the cipher; the variant follows from `key.len()`
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::param("AES key", "invalid key length");
        match key.len() {
            16 => aes::Aes128::new_from_slice(key).map(Aes::Aes128).map_err(invalid),
            24 => aes::Aes192::new_from_slice(key).map(Aes::Aes192).map_err(invalid),
            32 => aes::Aes256::new_from_slice(key).map(Aes::Aes256).map_err(invalid),
            actual => Err(Error::Length {
                context: "AES key",
                expected: 32,
                actual,
            }),
        }
    }

    /// Key length in bytes
    pub fn key_size(&self) -> usize {
        match self {
            Aes::Aes128(_) => 16,
            Aes::Aes192(_) => 24,
            Aes::Aes256(_) => 32,
        }
    }

    /// Encrypt one block in place
    pub fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Aes::Aes128(c) => c.encrypt_block(block),
            Aes::Aes192(c) => c.encrypt_block(block),
            Aes::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Decrypt one block in place
    pub fn decrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Aes::Aes128(c) => c.decrypt_block(block),
            Aes::Aes192(c) => c.decrypt_block(block),
            Aes::Aes256(c) => c.decrypt_block(block),
        }
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes{}", self.key_size() * 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS 197 appendix C
    #[test]
    fn test_fips197_vectors() {
        let plaintext: Block = hex::decode("00112233445566778899aabbccddeeff")
            .unwrap()
            .try_into()
            .unwrap();
        let cases = [
            ("000102030405060708090a0b0c0d0e0f", "69c4e0d86a7b0430d8cdb78070b4c55a"),
            (
                "000102030405060708090a0b0c0d0e0f1011121314151617",
                "dda97ca4864cdfe06eaf70a0ec0d7191",
            ),
            (
                "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
                "8ea2b7ca516745bfeafc49904b496089",
            ),
        ];
        for (key, expected) in cases {
            let cipher = Aes::new(&hex::decode(key).unwrap()).unwrap();
            let mut block = plaintext;
            cipher.encrypt_block(&mut block);
            assert_eq!(hex::encode(block), expected);
            cipher.decrypt_block(&mut block);
            assert_eq!(block, plaintext);
        }
    }

    #[test]
    fn test_rejects_bad_key_length() {
        let err = Aes::new(&[0u8; 20]).unwrap_err();
        assert!(matches!(err, Error::Length { actual: 20, .. }));
        assert_eq!(format!("{:?}", Aes::new(&[0u8; 24]).unwrap()), "Aes192");
    }
}
