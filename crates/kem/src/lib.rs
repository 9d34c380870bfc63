//! Key agreement
//!
//! Elliptic-curve key agreement (ECKA, BSI TR-03111 Section 4.3.1) between a
//! private key and a peer public key on the same domain parameters.

#![forbid(unsafe_code)]

pub mod ecka;

pub use ecka::{ecka, shared_secret, Ecka};
