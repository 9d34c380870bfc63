//! Constant values for the eccard library
//!
//! Named-curve domain parameters, object identifiers and the tag and size
//! constants of the card containers and the hybrid envelope.

pub mod curves;
pub mod envelope;
pub mod tags;

pub use curves::{NamedCurve, NAMED_CURVES};
