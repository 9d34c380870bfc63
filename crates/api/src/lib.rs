//! Public API traits and types for the eccard library
//!
//! This crate provides the public API surface for the eccard ecosystem: the
//! error type shared by every member crate and the scheme traits implemented
//! by ECDSA, ECKA and the hybrid envelope.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KeyAgreement, Pke, Signature};

// Re-export trait modules for direct access
pub use traits::{agreement, pke, signature};
