//! Digital Signature Schemes
//!
//! ECDSA over any prime-field curve described by
//! [`DomainParameters`](eccard_algorithms::ec::DomainParameters). Keys come
//! from `eccard-keys`; the digest is chosen from the field size.

#![forbid(unsafe_code)]

pub mod ecdsa;

pub use ecdsa::{Ecdsa, EcdsaSignature};
