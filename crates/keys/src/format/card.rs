//! Compact card templates
//!
//! Public key: `7F49 { 06 curve OID, 86 point }`.
//! Private key: `7F48 { 06 curve OID, 92 d }` with d as wide as the order.
//! Both require a named curve.

use eccard_algorithms::ec::{registry, PointFormat};
use eccard_algorithms::encoding::Tlv;
use eccard_api::Result;
use eccard_params::tags;
use zeroize::Zeroizing;

use crate::{PrivateKey, PublicKey};

pub(crate) fn encode_private(key: &PrivateKey) -> Result<Zeroizing<Vec<u8>>> {
    let oid = key.params().require_oid()?;
    let template = Tlv::constructed(
        tags::PRIVATE_KEY_TEMPLATE,
        vec![
            Tlv::object_identifier(oid),
            Tlv::primitive(tags::PRIVATE_SCALAR, key.to_be_bytes().as_slice()),
        ],
    );
    Ok(Zeroizing::new(template.to_bytes()))
}

pub(crate) fn decode_private(bytes: &[u8]) -> Result<PrivateKey> {
    let template = Tlv::from_bytes(bytes)?;
    template.expect_tag(tags::PRIVATE_KEY_TEMPLATE, "card private key")?;
    let oid = template
        .require(tags::OBJECT_IDENTIFIER)?
        .to_object_identifier()?;
    let params = registry::by_oid(&oid)?;
    let d = template.require(tags::PRIVATE_SCALAR)?.bytes()?;
    PrivateKey::from_be_bytes(d, params)
}

pub(crate) fn encode_public(key: &PublicKey, point_format: PointFormat) -> Result<Vec<u8>> {
    let oid = key.params().require_oid()?;
    let template = Tlv::constructed(
        tags::PUBLIC_KEY_TEMPLATE,
        vec![
            Tlv::object_identifier(oid),
            Tlv::primitive(tags::PUBLIC_POINT, key.to_octets(point_format)?),
        ],
    );
    Ok(template.to_bytes())
}

pub(crate) fn decode_public(bytes: &[u8]) -> Result<PublicKey> {
    let template = Tlv::from_bytes(bytes)?;
    template.expect_tag(tags::PUBLIC_KEY_TEMPLATE, "card public key")?;
    let oid = template
        .require(tags::OBJECT_IDENTIFIER)?
        .to_object_identifier()?;
    let params = registry::by_oid(&oid)?;
    let point = template.require(tags::PUBLIC_POINT)?.bytes()?;
    PublicKey::from_octets(point, params)
}
