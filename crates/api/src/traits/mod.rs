//! Trait definitions for eccard schemes

pub mod agreement;
pub mod pke;
pub mod signature;

pub use agreement::KeyAgreement;
pub use pke::Pke;
pub use signature::Signature;
