//! Elliptic-curve private keys

use std::fmt;
use std::sync::Arc;

use eccard_algorithms::ec::{self, DomainParameters};
use eccard_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::format::{self, KeyFormat};
use crate::public::PublicKey;

/// A private scalar d in `[1, n-1]` bound to its domain parameters
///
/// The public key is derived on demand as d·G. Equality and hashing compare
/// the scalar and the domain parameters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrivateKey {
    d: BigUint,
    params: Arc<DomainParameters>,
}

impl PrivateKey {
    /// Create a private key from an explicit scalar
    ///
    /// d = n is rejected as well as zero, since it maps to the point at infinity.
    pub fn new(d: BigUint, params: Arc<DomainParameters>) -> Result<Self> {
        if d.is_zero() || d >= *params.order() {
            return Err(Error::invalid_argument(
                "private key",
                "d not in range [1, n-1]",
            ));
        }
        Ok(PrivateKey { d, params })
    }

    /// Draw a fresh uniform scalar in `[1, n-1]`
    pub fn generate<R: CryptoRng + RngCore>(params: Arc<DomainParameters>, rng: &mut R) -> Self {
        let d = ec::random_scalar(&params, rng);
        debug!(curve = params.name().unwrap_or("explicit"), "generated private key");
        PrivateKey { d, params }
    }

    /// Create a private key from a big-endian scalar of any length
    pub fn from_be_bytes(bytes: &[u8], params: Arc<DomainParameters>) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes), params)
    }

    /// The private scalar d
    pub fn scalar(&self) -> &BigUint {
        &self.d
    }

    /// The domain parameters
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }

    /// Fixed-width big-endian scalar, as wide as the group order
    pub fn to_be_bytes(&self) -> Zeroizing<Vec<u8>> {
        let bytes = Zeroizing::new(self.d.to_bytes_be());
        let width = self.params.order_octet_length();
        let mut out = Zeroizing::new(vec![0u8; width - bytes.len()]);
        out.extend_from_slice(&bytes);
        out
    }

    /// Derive the public key d·G
    pub fn public_key(&self) -> Result<PublicKey> {
        let w = self.params.generator().multiply(&self.d, &self.params)?;
        PublicKey::new(w, Arc::clone(&self.params))
    }

    /// Serialize into one of the private key containers
    ///
    /// [`KeyFormat::X509`] holds public keys only and is rejected.
    pub fn encode(&self, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>> {
        debug!(?format, "encoding private key");
        format::encode_private(self, format)
    }

    /// Parse one of the private key containers
    pub fn decode(bytes: &[u8], format: KeyFormat) -> Result<Self> {
        debug!(?format, "decoding private key");
        format::decode_private(bytes, format)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("d", &"<redacted>")
            .field("params", &self.params)
            .finish()
    }
}
