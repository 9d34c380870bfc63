//! Cipher Block Chaining (CBC) mode, NIST SP 800-38A
//!
//! Input must already be a multiple of the block size; padding is the
//! caller's concern (see [`crate::padding`]).

use eccard_internal::constant_time::xor_in_place;
use zeroize::Zeroize;

use super::{Aes, Block, BLOCK_SIZE};
use crate::error::{validate, Result};

/// CBC mode over AES with a fixed IV
#[derive(Clone, Debug)]
pub struct Cbc {
    cipher: Aes,
    iv: Block,
}

impl Cbc {
    /// Creates a CBC instance with the given cipher and IV
    pub fn new(cipher: Aes, iv: Block) -> Self {
        Cbc { cipher, iv }
    }

    /// Encrypts block-aligned plaintext
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC plaintext", plaintext.len(), BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut chain = self.iv;
        for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
            xor_in_place(&mut chain, chunk);
            self.cipher.encrypt_block(&mut chain);
            ciphertext.extend_from_slice(&chain);
        }
        Ok(ciphertext)
    }

    /// Decrypts block-aligned ciphertext
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC ciphertext", ciphertext.len(), BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev = self.iv;
        let mut block = [0u8; BLOCK_SIZE];
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            block.copy_from_slice(chunk);
            self.cipher.decrypt_block(&mut block);
            xor_in_place(&mut block, &prev);
            plaintext.extend_from_slice(&block);
            prev.copy_from_slice(chunk);
        }
        block.zeroize();
        Ok(plaintext)
    }
}
