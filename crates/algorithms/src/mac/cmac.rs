//! CMAC (NIST SP 800-38B) over AES
//!
//! Subkeys K1/K2 are derived by doubling L = AES_K(0^128) in GF(2^128)
//! with the reduction constant Rb = 0x87.

use eccard_internal::constant_time::{ct_eq, xor_in_place};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Aes, Block, BLOCK_SIZE};
use crate::error::{validate, Result};

const RB: u8 = 0x87;

/// Full-length CMAC tag
pub type Tag = [u8; BLOCK_SIZE];

/// A keyed CMAC instance
#[derive(Clone, Debug)]
pub struct Cmac {
    cipher: Aes,
    subkeys: Subkeys,
}

#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
struct Subkeys {
    k1: Block,
    k2: Block,
}

fn dbl(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    let mut carry = 0u8;
    for i in (0..BLOCK_SIZE).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }
    // conditional reduction without branching on the secret MSB
    out[BLOCK_SIZE - 1] ^= RB & carry.wrapping_neg();
    out
}

impl Cmac {
    /// Key a CMAC instance with an AES-128/192/256 key
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Aes::new(key)?;
        let mut l = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut l);
        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        l.zeroize();
        Ok(Cmac {
            cipher,
            subkeys: Subkeys { k1, k2 },
        })
    }

    /// Compute the full 16-byte tag over the concatenation of `parts`
    pub fn compute_parts(&self, parts: &[&[u8]]) -> Tag {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        let mut message = Vec::with_capacity(total);
        for part in parts {
            message.extend_from_slice(part);
        }
        let tag = self.compute(&message);
        message.zeroize();
        tag
    }

    /// Compute the full 16-byte tag
    pub fn compute(&self, message: &[u8]) -> Tag {
        let blocks = ((message.len() + BLOCK_SIZE - 1) / BLOCK_SIZE).max(1);
        let complete = !message.is_empty() && message.len() % BLOCK_SIZE == 0;

        let mut state = [0u8; BLOCK_SIZE];
        for chunk in message.chunks(BLOCK_SIZE).take(blocks - 1) {
            xor_in_place(&mut state, chunk);
            self.cipher.encrypt_block(&mut state);
        }

        // last block, padded with 10* when incomplete
        let mut last = [0u8; BLOCK_SIZE];
        let tail = &message[(blocks - 1) * BLOCK_SIZE..];
        last[..tail.len()].copy_from_slice(tail);
        let subkey = if complete {
            &self.subkeys.k1
        } else {
            last[tail.len()] = 0x80;
            &self.subkeys.k2
        };
        xor_in_place(&mut state, &last);
        xor_in_place(&mut state, subkey);
        self.cipher.encrypt_block(&mut state);
        last.zeroize();
        state
    }

    /// The leftmost `len` bytes of the tag over the concatenation of `parts`
    pub fn compute_truncated(&self, parts: &[&[u8]], len: usize) -> Result<Vec<u8>> {
        validate::parameter(
            (1..=BLOCK_SIZE).contains(&len),
            "CMAC",
            "tag length must be between 1 and 16",
        )?;
        Ok(self.compute_parts(parts)[..len].to_vec())
    }

    /// Check a (possibly truncated) tag in constant time
    ///
    /// Tags longer than 16 bytes or empty never verify.
    pub fn verify_truncated(&self, parts: &[&[u8]], tag: &[u8]) -> bool {
        if tag.is_empty() || tag.len() > BLOCK_SIZE {
            return false;
        }
        let expected = self.compute_parts(parts);
        ct_eq(&expected[..tag.len()], tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SP 800-38B appendix D.3 (AES-256)
    const KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

    fn cmac() -> Cmac {
        Cmac::new(&hex::decode(KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_subkeys() {
        let mac = cmac();
        assert_eq!(hex::encode(mac.subkeys.k1), "cad1ed03299eedac2e9a99808621502f");
        assert_eq!(hex::encode(mac.subkeys.k2), "95a3da06533ddb585d3533010c42a0d9");
    }

    #[test]
    fn test_sp800_38b_vectors() {
        let mac = cmac();
        assert_eq!(hex::encode(mac.compute(&[])), "028962f61b7bf89efc6b551f4667d983");
        assert_eq!(
            hex::encode(mac.compute(&hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap())),
            "28a7023f452e8f82bd4bf28d8c37c35c"
        );
        let msg40 = hex::decode(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e5130c81c46a35ce411",
        )
        .unwrap();
        assert_eq!(hex::encode(mac.compute(&msg40)), "aaf3d8f1de5640c232f5b169b9c911e6");
    }

    #[test]
    fn test_parts_match_concatenation() {
        let mac = cmac();
        let whole = mac.compute(b"0123456789abcdefXYZ");
        assert_eq!(mac.compute_parts(&[&b"0123456789abcdef"[..], &b"XYZ"[..]]), whole);
    }

    #[test]
    fn test_truncated_tags() {
        let mac = cmac();
        let tag = mac.compute_truncated(&[], 8).unwrap();
        assert_eq!(hex::encode(&tag), "028962f61b7bf89e");
        assert!(mac.verify_truncated(&[], &tag));

        let mut bad = tag.clone();
        bad[7] ^= 1;
        assert!(!mac.verify_truncated(&[], &bad));
        assert!(!mac.verify_truncated(&[], &[]));
        assert!(!mac.verify_truncated(&[], &[0u8; 17]));
        assert!(mac.compute_truncated(&[], 0).is_err());
        assert!(mac.compute_truncated(&[], 17).is_err());

        // split input, D.3 example 2 tag truncated to 8 bytes
        let block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
        let parts = [&block[..5], &block[5..]];
        assert_eq!(
            hex::encode(mac.compute_truncated(&parts, 8).unwrap()),
            "28a7023f452e8f82"
        );
        assert!(mac.verify_truncated(&parts, &hex::decode("28a7023f452e8f82bd").unwrap()));
    }
}
