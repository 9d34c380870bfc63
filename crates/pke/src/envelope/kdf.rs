//! Session keys derived from the ECKA shared secret
//!
//! `K_enc = SHA-256(kab ‖ 00000001)`, `K_mac = SHA-256(kab ‖ 00000002)`, both
//! used as AES-256 keys. The CBC IV is `AES_Kenc(0^16)`.

use eccard_algorithms::block::{Aes, BLOCK_SIZE};
use eccard_algorithms::padding::{iso_pad, iso_unpad};
use eccard_algorithms::{Cbc, Cmac, HashAlgorithm};
use eccard_api::Result;
use eccard_params::envelope::{KDF_COUNTER_ENC, KDF_COUNTER_MAC, MAC_SIZE, SUBKEY_SIZE};
use zeroize::Zeroizing;

pub(crate) struct SessionKeys {
    cbc: Cbc,
    cmac: Cmac,
}

fn subkey(kab: &[u8], counter: u32) -> Zeroizing<Vec<u8>> {
    let counter = counter.to_be_bytes();
    Zeroizing::new(HashAlgorithm::Sha256.digest_chunks(&[kab, &counter[..]]))
}

impl SessionKeys {
    pub(crate) fn derive(kab: &[u8]) -> Result<Self> {
        let k_enc = subkey(kab, KDF_COUNTER_ENC);
        let k_mac = subkey(kab, KDF_COUNTER_MAC);

        let cipher = Aes::new(&k_enc[..SUBKEY_SIZE])?;
        let mut iv = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut iv);

        Ok(SessionKeys {
            cbc: Cbc::new(cipher, iv),
            cmac: Cmac::new(&k_mac[..SUBKEY_SIZE])?,
        })
    }

    /// ISO-pad and CBC-encrypt
    pub(crate) fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(iso_pad(plaintext, BLOCK_SIZE));
        Ok(self.cbc.encrypt(&padded)?)
    }

    /// CBC-decrypt and strip the ISO padding
    pub(crate) fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(self.cbc.decrypt(ciphertext)?);
        Ok(iso_unpad(&padded)?.to_vec())
    }

    /// CMAC over `0^16 ‖ C`, truncated to [`MAC_SIZE`] bytes
    pub(crate) fn mac(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(self
            .cmac
            .compute_truncated(&[&[0u8; BLOCK_SIZE][..], ciphertext], MAC_SIZE)?)
    }

    pub(crate) fn verify(&self, ciphertext: &[u8], mac: &[u8]) -> bool {
        mac.len() == MAC_SIZE
            && self
                .cmac
                .verify_truncated(&[&[0u8; BLOCK_SIZE][..], ciphertext], mac)
    }
}
