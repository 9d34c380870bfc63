//! Elliptic curve primitives over prime fields
//!
//! Curves are described at runtime by [`DomainParameters`], either built from
//! explicit values or taken from the named-curve [`registry`]. Points are a
//! tagged enum with the point at infinity as its own variant.

pub mod codec;
pub mod domain;
pub mod field;
pub mod point;
pub mod registry;

pub use codec::{
    encode_point, field_element_to_octets, octets_to_field_element, octets_to_point,
    octets_to_point_with_prime, point_to_compressed, point_to_uncompressed, PointFormat,
};
pub use domain::DomainParameters;
pub use point::Point;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

/// Draw a uniform scalar in [1, n-1] by rejection sampling
///
/// Random strings of the byte length of n are masked down to the bit length
/// of n and rejected until they fall into range.
pub fn random_scalar<R: CryptoRng + RngCore>(params: &DomainParameters, rng: &mut R) -> BigUint {
    let n = params.order();
    let len = params.order_octet_length();
    let excess_bits = (len as u64) * 8 - n.bits();
    let mask = 0xffu8 >> excess_bits;
    let mut buf = vec![0u8; len];

    let mut attempts = 0u32;
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        attempts += 1;
        if candidate.bits() > 0 && candidate < *n {
            trace!(attempts, "sampled scalar");
            buf.zeroize();
            return candidate;
        }
    }
}
