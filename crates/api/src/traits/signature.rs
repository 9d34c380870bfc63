//! Digital signature traits for eccard
//!
//! Keys are bound to runtime domain parameters, so key generation lives on the
//! key types themselves rather than on this trait.

use crate::Result;

/// Core trait for digital signature algorithms
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey: Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Sign a message with the given secret key
    ///
    /// Implementations should be deterministic when possible.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns [`crate::Error::InvalidSignature`] for any signature that does not verify.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
