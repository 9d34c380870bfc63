//! Elliptic-curve public keys

use std::sync::Arc;

use eccard_algorithms::ec::{codec, DomainParameters, Point, PointFormat};
use eccard_api::{Error, Result};
use tracing::debug;

use crate::format::{self, KeyFormat};

/// A point W ≠ O on the curve of its domain parameters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    w: Point,
    params: Arc<DomainParameters>,
}

impl PublicKey {
    /// Create a public key, rejecting the point at infinity and off-curve points
    pub fn new(w: Point, params: Arc<DomainParameters>) -> Result<Self> {
        if w.is_infinity() {
            return Err(Error::invalid_argument(
                "public key",
                "public point is the point at infinity",
            ));
        }
        if !w.is_on_curve(&params) {
            return Err(Error::invalid_argument("public key", "public point not on curve"));
        }
        Ok(PublicKey { w, params })
    }

    /// Decode a SEC 1 point encoding and validate it
    pub fn from_octets(octets: &[u8], params: Arc<DomainParameters>) -> Result<Self> {
        let w = codec::octets_to_point(octets, &params)?;
        Self::new(w, params)
    }

    /// The public point W
    pub fn point(&self) -> &Point {
        &self.w
    }

    /// The domain parameters
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }

    /// SEC 1 encoding of W
    pub fn to_octets(&self, point_format: PointFormat) -> Result<Vec<u8>> {
        Ok(codec::encode_point(&self.w, &self.params, point_format)?)
    }

    /// Serialize into a public key container with an uncompressed point
    pub fn encode(&self, format: KeyFormat) -> Result<Vec<u8>> {
        self.encode_with_point_format(format, PointFormat::Uncompressed)
    }

    /// Serialize into a public key container with the given point format
    ///
    /// [`KeyFormat::Pkcs8`] and [`KeyFormat::Sec1`] carry private keys only.
    pub fn encode_with_point_format(
        &self,
        format: KeyFormat,
        point_format: PointFormat,
    ) -> Result<Vec<u8>> {
        debug!(?format, ?point_format, "encoding public key");
        format::encode_public(self, format, point_format)
    }

    /// Parse a public key container
    pub fn decode(bytes: &[u8], format: KeyFormat) -> Result<Self> {
        debug!(?format, "decoding public key");
        format::decode_public(bytes, format)
    }
}
