//! The (r, s) pair and its DER framing

use der::asn1::UintRef;
use der::{Decode, Encode, Sequence};
use eccard_api::{Error, Result};
use num_bigint::BigUint;

/// `Ecdsa-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }`
#[derive(Sequence)]
struct SignatureValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

fn malformed(err: der::Error) -> Error {
    Error::invalid_argument("ECDSA signature", err.to_string())
}

/// ECDSA signature components (r, s)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EcdsaSignature {
    r: BigUint,
    s: BigUint,
}

impl EcdsaSignature {
    /// Wrap raw components; no range check happens here, verification does it
    pub fn new(r: BigUint, s: BigUint) -> Self {
        EcdsaSignature { r, s }
    }

    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Serialize to `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let (r, s) = (self.r.to_bytes_be(), self.s.to_bytes_be());
        SignatureValue {
            r: UintRef::new(&r).map_err(malformed)?,
            s: UintRef::new(&s).map_err(malformed)?,
        }
        .to_der()
        .map_err(malformed)
    }

    /// Parse `SEQUENCE { INTEGER r, INTEGER s }`
    ///
    /// Trailing bytes, extra elements, negative and non-minimal integers are
    /// rejected.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let value = SignatureValue::from_der(bytes).map_err(malformed)?;
        Ok(EcdsaSignature::new(
            BigUint::from_bytes_be(value.r.as_bytes()),
            BigUint::from_bytes_be(value.s.as_bytes()),
        ))
    }
}
