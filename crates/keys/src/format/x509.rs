//! RFC 5480 SubjectPublicKeyInfo
//!
//! `SEQUENCE { AlgorithmIdentifier { id-ecPublicKey, ECParameters }, BIT STRING point }`

use der::asn1::BitStringRef;
use der::{Decode, Encode};
use eccard_algorithms::ec::PointFormat;
use eccard_api::{Error, Result};
use spki::SubjectPublicKeyInfoRef;

use super::{asn1, params};
use crate::PublicKey;

const CONTEXT: &str = "SubjectPublicKeyInfo";

pub(crate) fn encode_public(key: &PublicKey, point_format: PointFormat) -> Result<Vec<u8>> {
    let point = key.to_octets(point_format)?;
    let parameters = params::encode(key.params())?;
    let spki = SubjectPublicKeyInfoRef {
        algorithm: params::algorithm_identifier(&parameters)?,
        subject_public_key: BitStringRef::from_bytes(&point).map_err(asn1(CONTEXT))?,
    };
    spki.to_der().map_err(asn1(CONTEXT))
}

pub(crate) fn decode_public(bytes: &[u8]) -> Result<PublicKey> {
    let spki = SubjectPublicKeyInfoRef::from_der(bytes).map_err(asn1(CONTEXT))?;
    let params = params::parse_algorithm_identifier(&spki.algorithm)?;
    let point = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::invalid_argument(CONTEXT, "public key has unused bits"))?;
    PublicKey::from_octets(point, params)
}
