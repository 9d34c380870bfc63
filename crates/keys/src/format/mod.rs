//! Key container formats
//!
//! Every format is an encode/decode pair of free functions around the
//! in-memory keys. Decoding always ends in [`PrivateKey::new`] or
//! [`PublicKey::new`], so all formats share one validation path.
//!
//! The DER containers are built from `der`, `spki` and `pkcs8` types; the
//! card templates use the BER-TLV codec of `eccard_algorithms`.

use eccard_algorithms::ec::PointFormat;
use eccard_api::{Error, Result};
use zeroize::Zeroizing;

use crate::{PrivateKey, PublicKey};

mod card;
mod params;
mod pkcs8;
mod sec1;
mod x509;

/// Supported key containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// Compact tag + curve OID + value templates used on cards
    Card,
    /// PKCS #8 PrivateKeyInfo (private keys only)
    Pkcs8,
    /// SEC 1 ECPrivateKey (private keys only)
    Sec1,
    /// X.509 SubjectPublicKeyInfo (public keys only)
    X509,
}

fn unsupported(message: &'static str) -> Error {
    Error::invalid_argument("key format", message)
}

fn asn1(context: &'static str) -> impl FnOnce(der::Error) -> Error {
    move |err| Error::invalid_argument(context, err.to_string())
}

// A missing sub-element while decoding is a malformed container
fn malformed(err: Error) -> Error {
    match err {
        Error::NoSuchElement { context, message } => Error::InvalidArgument { context, message },
        other => other,
    }
}

pub(crate) fn encode_private(key: &PrivateKey, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>> {
    match format {
        KeyFormat::Card => card::encode_private(key),
        KeyFormat::Pkcs8 => pkcs8::encode_private(key),
        KeyFormat::Sec1 => sec1::encode_private(key),
        KeyFormat::X509 => Err(unsupported("format holds public keys only")),
    }
}

pub(crate) fn decode_private(bytes: &[u8], format: KeyFormat) -> Result<PrivateKey> {
    match format {
        KeyFormat::Card => card::decode_private(bytes),
        KeyFormat::Pkcs8 => pkcs8::decode_private(bytes),
        KeyFormat::Sec1 => sec1::decode_private(bytes),
        KeyFormat::X509 => Err(unsupported("format holds public keys only")),
    }
    .map_err(malformed)
}

pub(crate) fn encode_public(
    key: &PublicKey,
    format: KeyFormat,
    point_format: PointFormat,
) -> Result<Vec<u8>> {
    match format {
        KeyFormat::Card => card::encode_public(key, point_format),
        KeyFormat::X509 => x509::encode_public(key, point_format),
        KeyFormat::Pkcs8 | KeyFormat::Sec1 => Err(unsupported("format holds private keys only")),
    }
}

pub(crate) fn decode_public(bytes: &[u8], format: KeyFormat) -> Result<PublicKey> {
    match format {
        KeyFormat::Card => card::decode_public(bytes),
        KeyFormat::X509 => x509::decode_public(bytes),
        KeyFormat::Pkcs8 | KeyFormat::Sec1 => Err(unsupported("format holds private keys only")),
    }
    .map_err(malformed)
}
