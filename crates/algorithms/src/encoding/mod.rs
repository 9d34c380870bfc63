//! BER-TLV card templates and object identifiers
//!
//! The PKCS #8, SEC 1 and X.509 structures are DER and go through the `der`
//! crate directly. The card and envelope templates use application tags
//! such as `7F49` that a DER tag number cannot hold, so they are built on
//! [`Tlv`].

pub mod tlv;

pub use der::asn1::ObjectIdentifier;
pub use tlv::{Tlv, Value};
