//! Key agreement trait

use crate::error::Result;
use zeroize::Zeroizing;

/// Diffie-Hellman style key agreement between a private and a public key
pub trait KeyAgreement {
    /// Public key type
    type PublicKey;

    /// Private key type
    type SecretKey;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Derive the shared secret octets from the local private key and the peer public key
    ///
    /// The result is the same for both parties: `agree(skA, pkB) == agree(skB, pkA)`.
    fn agree(secret_key: &Self::SecretKey, peer: &Self::PublicKey) -> Result<Zeroizing<Vec<u8>>>;
}
