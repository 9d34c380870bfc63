//! RFC 5208 PrivateKeyInfo wrapping an ECPrivateKey
//!
//! The curve travels in the algorithm identifier; the inner ECPrivateKey
//! omits its own parameters.

use der::{Decode, Encode};
use eccard_api::Result;
use pkcs8::PrivateKeyInfo;
use zeroize::Zeroizing;

use super::{asn1, params, sec1};
use crate::PrivateKey;

const CONTEXT: &str = "PrivateKeyInfo";

pub(crate) fn encode_private(key: &PrivateKey) -> Result<Zeroizing<Vec<u8>>> {
    let inner = sec1::ec_private_key(key, false)?;
    let parameters = params::encode(key.params())?;
    let info = PrivateKeyInfo::new(params::algorithm_identifier(&parameters)?, &inner);
    Ok(Zeroizing::new(info.to_der().map_err(asn1(CONTEXT))?))
}

pub(crate) fn decode_private(bytes: &[u8]) -> Result<PrivateKey> {
    // a v2 outer public key is ignored; the inner one is checked against d
    let info = PrivateKeyInfo::from_der(bytes).map_err(asn1(CONTEXT))?;
    let params = params::parse_algorithm_identifier(&info.algorithm)?;
    sec1::parse_ec_private_key(info.private_key, Some(params))
}
