//! Elliptic-curve keys for the eccard library
//!
//! [`PrivateKey`] and [`PublicKey`] bind a scalar or point to shared
//! [`DomainParameters`](eccard_algorithms::ec::DomainParameters). Both
//! serialize to the containers listed in [`KeyFormat`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod format;
mod private;
mod public;

pub use format::KeyFormat;
pub use private::PrivateKey;
pub use public::PublicKey;
