//! ECIES-style hybrid envelope
//!
//! Encipher:
//! 1. Generate an ephemeral key pair on the receiver's domain parameters
//! 2. kab = ECKA shared secret of the ephemeral private and the receiver public key
//! 3. Derive `K_enc` and `K_mac` as SHA-256 over kab and a 32-bit counter
//! 4. ISO-pad the payload and CBC-encrypt it under `K_enc` with IV `AES_Kenc(0^16)`
//! 5. T = CMAC(`K_mac`, `0^16 ‖ C`) truncated to 8 bytes
//! 6. Emit `A6 { 06 OID, 7F49 { 86 P_e }, 86 (01 ‖ C), 8E T }`
//!
//! Decipher undoes these steps. Whatever goes wrong on the way (container
//! structure, curve identifier, ephemeral point, MAC, padding) the caller
//! only ever sees [`Error::decipher`].

use std::sync::Arc;

use eccard_algorithms::ec::PointFormat;
use eccard_api::{Error, Pke, Result, ResultExt};
use eccard_kem::shared_secret;
use eccard_keys::{PrivateKey, PublicKey};
use rand::{CryptoRng, RngCore};
use tracing::debug;

mod container;
mod kdf;

use kdf::SessionKeys;

/// The hybrid envelope as a [`Pke`] scheme
pub struct Envelope;

/// Encipher for a receiver public key
///
/// The receiver's curve needs an object identifier; anonymous curves fail
/// with a `NoSuchElement` error.
pub fn encipher<R: CryptoRng + RngCore>(
    receiver: &PublicKey,
    plaintext: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    // anonymous curves are rejected before the ephemeral key is drawn
    receiver.params().require_oid()?;
    let ephemeral = PrivateKey::generate(Arc::clone(receiver.params()), rng);
    encipher_with_ephemeral(receiver, plaintext, &ephemeral)
}

pub(crate) fn encipher_with_ephemeral(
    receiver: &PublicKey,
    plaintext: &[u8],
    ephemeral: &PrivateKey,
) -> Result<Vec<u8>> {
    let params = receiver.params();
    let oid = params.require_oid()?;
    debug!(
        curve = params.name().unwrap_or("explicit"),
        len = plaintext.len(),
        "envelope encipher"
    );

    let kab = shared_secret(ephemeral, receiver)?;
    let keys = SessionKeys::derive(&kab)?;
    let ciphertext = keys.encrypt(plaintext)?;
    let mac = keys.mac(&ciphertext)?;
    let ephemeral_point = ephemeral
        .public_key()?
        .to_octets(PointFormat::Uncompressed)?;

    Ok(container::encode(oid, &ephemeral_point, &ciphertext, &mac))
}

/// Decipher an envelope with the receiver private key
///
/// Every failure is reported as the same [`Error::decipher`].
pub fn decipher(receiver: &PrivateKey, envelope: &[u8]) -> Result<Vec<u8>> {
    open(receiver, envelope).wrap_err(|| {
        debug!("envelope decipher failed");
        Error::decipher()
    })
}

fn open(receiver: &PrivateKey, envelope: &[u8]) -> Result<Vec<u8>> {
    let parts = container::decode(envelope)?;
    let params = receiver.params();
    if parts.oid != *params.require_oid()? {
        return Err(Error::invalid_argument("envelope", "curve identifier mismatch"));
    }

    let ephemeral = PublicKey::from_octets(&parts.ephemeral_point, Arc::clone(params))?;
    let kab = shared_secret(receiver, &ephemeral)?;
    let keys = SessionKeys::derive(&kab)?;
    if !keys.verify(&parts.ciphertext, &parts.mac) {
        return Err(Error::invalid_argument("envelope", "MAC mismatch"));
    }
    debug!(curve = params.name().unwrap_or("explicit"), "envelope decipher");
    keys.decrypt(&parts.ciphertext)
}

/// `encipher` as a method of the receiver public key
pub trait Encipher {
    /// Wrap `plaintext` in an envelope for this key
    fn encipher<R: CryptoRng + RngCore>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>;
}

/// `decipher` as a method of the receiver private key
pub trait Decipher {
    /// Open an envelope addressed to this key
    fn decipher(&self, envelope: &[u8]) -> Result<Vec<u8>>;
}

impl Encipher for PublicKey {
    fn encipher<R: CryptoRng + RngCore>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>> {
        encipher(self, plaintext, rng)
    }
}

impl Decipher for PrivateKey {
    fn decipher(&self, envelope: &[u8]) -> Result<Vec<u8>> {
        decipher(self, envelope)
    }
}

impl Pke for Envelope {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "ECKA-AES-CBC-CMAC"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext> {
        encipher(pk_recipient, plaintext, rng)
    }

    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Vec<u8>> {
        decipher(sk_recipient, ciphertext)
    }
}
