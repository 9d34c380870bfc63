//! Conversions between field elements, curve points and octet strings
//!
//! Encodings follow SEC 1 / BSI TR-03111:
//! - `0x00` for the point at infinity
//! - `0x04 ∥ X ∥ Y` uncompressed
//! - `0x02 ∥ X` or `0x03 ∥ X` compressed, tag bit = parity of Y
//!
//! Every coordinate is zero-padded to τ = ceil(bitlength(p)/8) octets.

use num_bigint::BigUint;
use num_traits::Zero;

use super::domain::DomainParameters;
use super::field::sqrt_3_mod_4;
use super::point::{curve_rhs, Point};
use crate::error::{validate, Error, Result};

/// Leading octet of the point-at-infinity encoding
pub const TAG_INFINITY: u8 = 0x00;
/// Leading octet of a compressed point with even Y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;
/// Leading octet of a compressed point with odd Y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;
/// Leading octet of an uncompressed point
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Format of an encoded curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointFormat {
    /// Uncompressed: 0x04 ∥ x ∥ y
    #[default]
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

/// Fixed-width big-endian encoding of a field element
///
/// The result is exactly τ octets; x must lie in `[0, p)`.
pub fn field_element_to_octets(x: &BigUint, params: &DomainParameters) -> Result<Vec<u8>> {
    if x >= params.p() {
        return Err(Error::param("field element", "0 > fieldElement >= p"));
    }
    Ok(to_fixed_octets(x, params.octet_length()))
}

/// Big-endian decoding of an octet string; the empty string decodes to zero
///
/// No range check is applied; callers that need `x < p` check it themselves.
pub fn octets_to_field_element(octets: &[u8]) -> BigUint {
    BigUint::from_bytes_be(octets)
}

/// Left-pad the big-endian magnitude of `x` with zeros to `len` octets
///
/// `x` must fit; callers range-check beforehand.
pub(crate) fn to_fixed_octets(x: &BigUint, len: usize) -> Vec<u8> {
    let bytes = if x.is_zero() {
        Vec::new()
    } else {
        x.to_bytes_be()
    };
    let mut out = vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}

/// `0x00` for O, otherwise `0x04 ∥ X ∥ Y`
pub fn point_to_uncompressed(point: &Point, params: &DomainParameters) -> Result<Vec<u8>> {
    match point {
        Point::Infinity => Ok(vec![TAG_INFINITY]),
        Point::Affine { x, y } => {
            let mut out = Vec::with_capacity(1 + 2 * params.octet_length());
            out.push(TAG_UNCOMPRESSED);
            out.extend_from_slice(&field_element_to_octets(x, params)?);
            out.extend_from_slice(&field_element_to_octets(y, params)?);
            Ok(out)
        }
    }
}

/// `0x00` for O, otherwise `0x02 ∥ X` (Y even) or `0x03 ∥ X` (Y odd)
pub fn point_to_compressed(point: &Point, params: &DomainParameters) -> Result<Vec<u8>> {
    match point {
        Point::Infinity => Ok(vec![TAG_INFINITY]),
        Point::Affine { x, y } => {
            let tag = if y.bit(0) {
                TAG_COMPRESSED_ODD
            } else {
                TAG_COMPRESSED_EVEN
            };
            let mut out = Vec::with_capacity(1 + params.octet_length());
            out.push(tag);
            out.extend_from_slice(&field_element_to_octets(x, params)?);
            Ok(out)
        }
    }
}

/// Encode a point in the requested format
pub fn encode_point(point: &Point, params: &DomainParameters, format: PointFormat) -> Result<Vec<u8>> {
    match format {
        PointFormat::Uncompressed => point_to_uncompressed(point, params),
        PointFormat::Compressed => point_to_compressed(point, params),
    }
}

/// Decode a point, dispatching on the leading octet
///
/// Uncompressed points are not checked against the curve equation;
/// compressed points satisfy it by construction.
pub fn octets_to_point(octets: &[u8], params: &DomainParameters) -> Result<Point> {
    let tau = params.octet_length();
    match octets.first() {
        Some(&TAG_INFINITY) => decode_infinity(octets),
        Some(&TAG_UNCOMPRESSED) => {
            validate::length("uncompressed point", octets.len(), 1 + 2 * tau)?;
            Ok(Point::affine(
                octets_to_field_element(&octets[1..=tau]),
                octets_to_field_element(&octets[1 + tau..]),
            ))
        }
        Some(&tag @ (TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD)) => {
            validate::length("compressed point", octets.len(), 1 + tau)?;
            let x = octets_to_field_element(&octets[1..]);
            if x >= *params.p() {
                return Err(Error::param("field element", "0 > fieldElement >= p"));
            }

            let alpha = curve_rhs(&x, params);
            let beta = sqrt_3_mod_4(&alpha, params.p())?;
            let want_odd = tag == TAG_COMPRESSED_ODD;
            let y = if beta.bit(0) == want_odd {
                beta
            } else if beta.is_zero() {
                // y = 0 is even and has no odd counterpart
                return Err(Error::param(
                    "point decoding",
                    "compressed y bit does not match point",
                ));
            } else {
                params.p() - beta
            };
            Ok(Point::affine(x, y))
        }
        _ => Err(Error::param("point decoding", "unimplemented encoding")),
    }
}

/// Decode a point when only the prime p is known
///
/// Supports the infinity and uncompressed encodings; the coordinate width is
/// derived from the total length, which therefore has to be odd. Both
/// coordinates must lie in `[0, p)`.
pub fn octets_to_point_with_prime(octets: &[u8], p: &BigUint) -> Result<Point> {
    match octets.first() {
        Some(&TAG_INFINITY) => decode_infinity(octets),
        Some(&TAG_UNCOMPRESSED) => {
            if octets.len() % 2 == 0 {
                return Err(Error::param(
                    "point decoding",
                    "length of octet string is even",
                ));
            }
            let width = (octets.len() - 1) / 2;
            let x = octets_to_field_element(&octets[1..=width]);
            let y = octets_to_field_element(&octets[1 + width..]);
            if x >= *p || y >= *p {
                return Err(Error::param("field element", "0 > fieldElement >= p"));
            }
            Ok(Point::affine(x, y))
        }
        Some(&(TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD)) => Err(Error::param(
            "point decoding",
            "cannot calculate square root, use uncompressed encoding",
        )),
        _ => Err(Error::param("point decoding", "unimplemented encoding")),
    }
}

fn decode_infinity(octets: &[u8]) -> Result<Point> {
    validate::length("point at infinity", octets.len(), 1)?;
    Ok(Point::Infinity)
}
