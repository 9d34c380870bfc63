//! Primitive layer of the eccard library
//!
//! This crate provides the building blocks the key, signature, agreement and
//! envelope crates are assembled from:
//!
//! - prime-field elliptic curve arithmetic over runtime [`DomainParameters`]
//! - the SEC 1 point and field-element codec
//! - a registry of named curves
//! - BER-TLV card templates and object identifiers
//! - AES with CBC, CMAC and ISO padding
//! - SHA-2 digest selection
//!
//! Arbitrary-precision integers are `num-bigint` values throughout.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod ec;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod mac;
pub mod padding;

pub use block::{Aes, Cbc};
pub use ec::{DomainParameters, Point, PointFormat};
pub use encoding::{ObjectIdentifier, Tlv};
pub use error::{validate, Error, Result};
pub use hash::HashAlgorithm;
pub use mac::Cmac;

pub use num_bigint::BigUint;
