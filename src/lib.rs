//! # eccard
//!
//! Elliptic-curve cryptography for smart-card style systems, over prime-field
//! curves described at runtime.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccard = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA
//! - `kem` (default): ECKA key agreement
//! - `pke` (default): the ECIES-style hybrid envelope (implies `kem`)
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `eccard-algorithms`: curve arithmetic, codecs, named curves, AES/CBC/CMAC
//! - `eccard-keys`: private and public keys and their containers
//! - `eccard-sign`: ECDSA
//! - `eccard-kem`: ECKA
//! - `eccard-pke`: hybrid envelope
//!
//! ```
//! use eccard::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let params = named_curve("brainpoolP256r1")?;
//! let key = PrivateKey::generate(params, &mut rng);
//! let public = key.public_key()?;
//!
//! let envelope = public.encipher(b"hello card", &mut rng)?;
//! assert_eq!(key.decipher(&envelope)?, b"hello card");
//!
//! let signature = Ecdsa::sign(b"hello card", &key)?;
//! assert!(Ecdsa::verify(b"hello card", &signature, &public).is_ok());
//! # Ok::<(), eccard::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use eccard_algorithms as algorithms;
pub use eccard_api as api;
pub use eccard_internal as internal;
pub use eccard_keys as keys;
pub use eccard_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use eccard_kem as kem;

#[cfg(feature = "sign")]
pub use eccard_sign as sign;

#[cfg(feature = "pke")]
pub use eccard_pke as pke;

/// Look up one of the built-in curves by name
pub fn named_curve(
    name: &str,
) -> api::Result<std::sync::Arc<algorithms::ec::DomainParameters>> {
    Ok(algorithms::ec::registry::by_name(name)?)
}

/// Common imports for eccard users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Pke, Signature};

    // Curves, points and keys
    pub use crate::algorithms::{DomainParameters, Point, PointFormat};
    pub use crate::keys::{KeyFormat, PrivateKey, PublicKey};
    pub use crate::named_curve;

    #[cfg(feature = "sign")]
    pub use crate::sign::{Ecdsa, EcdsaSignature};

    #[cfg(feature = "kem")]
    pub use crate::kem::Ecka;

    #[cfg(feature = "pke")]
    pub use crate::pke::{Decipher, Encipher, Envelope};
}
