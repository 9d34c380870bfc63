//! RFC 5915 ECPrivateKey
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!   version        INTEGER { ecPrivkeyVer1(1) },
//!   privateKey     OCTET STRING,
//!   parameters [0] ECParameters OPTIONAL,
//!   publicKey  [1] BIT STRING OPTIONAL
//! }
//! ```

use std::sync::Arc;

use der::asn1::{BitStringRef, OctetStringRef};
use der::{Decode, Encode, Sequence};
use eccard_algorithms::ec::{DomainParameters, PointFormat};
use eccard_api::{Error, Result};
use zeroize::Zeroizing;

use super::asn1;
use super::params::EcParameters;
use crate::{PrivateKey, PublicKey};

const CONTEXT: &str = "ECPrivateKey";

const VERSION: u8 = 1;

#[derive(Sequence)]
struct EcPrivateKey<'a> {
    version: u8,
    private_key: OctetStringRef<'a>,
    #[asn1(context_specific = "0", optional = "true")]
    parameters: Option<EcParameters>,
    #[asn1(context_specific = "1", optional = "true")]
    public_key: Option<BitStringRef<'a>>,
}

/// DER of the ECPrivateKey; PKCS #8 omits the parameters
pub(crate) fn ec_private_key(key: &PrivateKey, with_params: bool) -> Result<Zeroizing<Vec<u8>>> {
    let d = key.to_be_bytes();
    let public = key.public_key()?.to_octets(PointFormat::Uncompressed)?;
    let parameters = if with_params {
        Some(EcParameters::from_domain(key.params())?)
    } else {
        None
    };

    let structure = EcPrivateKey {
        version: VERSION,
        private_key: OctetStringRef::new(&d).map_err(asn1(CONTEXT))?,
        parameters,
        public_key: Some(BitStringRef::from_bytes(&public).map_err(asn1(CONTEXT))?),
    };
    Ok(Zeroizing::new(structure.to_der().map_err(asn1(CONTEXT))?))
}

/// Parse an ECPrivateKey
///
/// `outer` carries parameters known from an enclosing structure; when both are
/// present they must agree. An embedded public key must match d·G.
pub(crate) fn parse_ec_private_key(
    bytes: &[u8],
    outer: Option<Arc<DomainParameters>>,
) -> Result<PrivateKey> {
    let structure = EcPrivateKey::from_der(bytes).map_err(asn1(CONTEXT))?;
    if structure.version != VERSION {
        return Err(Error::invalid_argument(CONTEXT, "unsupported version"));
    }
    let inner = structure
        .parameters
        .as_ref()
        .map(EcParameters::to_domain)
        .transpose()?;

    let params = match (outer, inner) {
        (Some(outer), Some(inner)) if outer != inner => {
            return Err(Error::invalid_argument(
                CONTEXT,
                "conflicting domain parameters",
            ))
        }
        (Some(params), _) | (None, Some(params)) => params,
        (None, None) => {
            return Err(Error::invalid_argument(CONTEXT, "domain parameters missing"))
        }
    };

    let key = PrivateKey::from_be_bytes(structure.private_key.as_bytes(), params)?;
    if let Some(public) = structure.public_key {
        let octets = public
            .as_bytes()
            .ok_or_else(|| Error::invalid_argument(CONTEXT, "public key has unused bits"))?;
        let embedded = PublicKey::from_octets(octets, Arc::clone(key.params()))?;
        if embedded != key.public_key()? {
            return Err(Error::invalid_argument(
                CONTEXT,
                "public key does not match private key",
            ));
        }
    }
    Ok(key)
}

pub(crate) fn encode_private(key: &PrivateKey) -> Result<Zeroizing<Vec<u8>>> {
    ec_private_key(key, true)
}

pub(crate) fn decode_private(bytes: &[u8]) -> Result<PrivateKey> {
    parse_ec_private_key(bytes, None)
}
