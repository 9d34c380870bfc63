//! Public Key Encryption (PKE) schemes for the eccard library.
//!
//! The only scheme is the ECIES-style [`envelope`]: an ephemeral ECKA
//! agreement feeds a SHA-256 KDF, the payload is ISO-padded and AES-CBC
//! encrypted, and a truncated CMAC authenticates the ciphertext.

#![forbid(unsafe_code)]

pub mod envelope;

pub use envelope::{decipher, encipher, Decipher, Encipher, Envelope};
