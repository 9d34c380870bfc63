//! `A6 { 06 OID, 7F49 { 86 P_e }, 86 (01 ‖ C), 8E T }`
//!
//! The four sub-elements may come in any order but all of them must be
//! present and nothing else may be.

use eccard_algorithms::encoding::Tlv;
use eccard_algorithms::ObjectIdentifier;
use eccard_api::{Error, Result};
use eccard_params::envelope::{MAC_SIZE, PADDING_INDICATOR};
use eccard_params::tags;

const CONTEXT: &str = "envelope container";

/// Decoded envelope fields
#[derive(Debug)]
pub(crate) struct Parts {
    pub(crate) oid: ObjectIdentifier,
    pub(crate) ephemeral_point: Vec<u8>,
    pub(crate) ciphertext: Vec<u8>,
    pub(crate) mac: Vec<u8>,
}

pub(crate) fn encode(
    oid: &ObjectIdentifier,
    ephemeral_point: &[u8],
    ciphertext: &[u8],
    mac: &[u8],
) -> Vec<u8> {
    let mut indicated = Vec::with_capacity(ciphertext.len() + 1);
    indicated.push(PADDING_INDICATOR);
    indicated.extend_from_slice(ciphertext);

    Tlv::constructed(
        tags::ENVELOPE,
        vec![
            Tlv::object_identifier(oid),
            Tlv::constructed(
                tags::PUBLIC_KEY_TEMPLATE,
                vec![Tlv::primitive(tags::PUBLIC_POINT, ephemeral_point)],
            ),
            Tlv::primitive(tags::CIPHERTEXT, indicated),
            Tlv::primitive(tags::MAC, mac),
        ],
    )
    .to_bytes()
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Parts> {
    let envelope = Tlv::from_bytes(bytes)?;
    envelope.expect_tag(tags::ENVELOPE, CONTEXT)?;
    if envelope.children()?.len() != 4 {
        return Err(Error::invalid_argument(CONTEXT, "expected four elements"));
    }

    let oid = envelope
        .require(tags::OBJECT_IDENTIFIER)?
        .to_object_identifier()?;
    let ephemeral_point = envelope
        .require(tags::PUBLIC_KEY_TEMPLATE)?
        .require(tags::PUBLIC_POINT)?
        .bytes()?
        .to_vec();

    let ciphertext = match envelope.require(tags::CIPHERTEXT)?.bytes()? {
        [indicator, rest @ ..] if *indicator == PADDING_INDICATOR => rest.to_vec(),
        _ => return Err(Error::invalid_argument(CONTEXT, "unexpected padding indicator")),
    };

    let mac = envelope.require(tags::MAC)?.bytes()?.to_vec();
    if mac.len() != MAC_SIZE {
        return Err(Error::invalid_argument(CONTEXT, "unexpected MAC length"));
    }

    Ok(Parts {
        oid,
        ephemeral_point,
        ciphertext,
        mac,
    })
}
