//! Elliptic curve domain parameters
//!
//! A [`DomainParameters`] value describes the curve y² = x³ + a·x + b over
//! F_p together with a generator G of order n and the cofactor h. Values are
//! immutable after construction and compared and hashed by value.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use super::field::{is_probable_prime, mod_add, mod_mul};
use super::point::Point;
use super::registry;
use crate::encoding::ObjectIdentifier;
use crate::error::{validate, Error, Result};

/// Immutable description of a prime-field Weierstrass curve
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DomainParameters {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    h: BigUint,
    oid: Option<ObjectIdentifier>,
    name: Option<&'static str>,
    tau: usize,
}

impl DomainParameters {
    /// Construct domain parameters from explicit values
    ///
    /// Validates that p is an odd prime, `0 ≤ a, b < p`, the curve is
    /// non-singular, G is an affine point on the curve, n is prime and h ≥ 1.
    /// The order of G is not recomputed. If the values equal a named curve,
    /// its object identifier is attached.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: Point,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self> {
        let candidate = Self::from_parts(p, a, b, g, n, h, None, None);
        candidate.validate()?;

        if !is_probable_prime(&candidate.p) {
            return Err(Error::param("domain parameters", "p is not prime"));
        }
        if !is_probable_prime(&candidate.n) {
            return Err(Error::param("domain parameters", "order n is not prime"));
        }

        let named = registry::named_curves()
            .iter()
            .find(|named| named.same_curve(&candidate));
        Ok(match named {
            Some(named) => {
                debug!(curve = named.name.unwrap_or("?"), "explicit parameters match a named curve");
                named.as_ref().clone()
            }
            None => {
                debug!(bits = candidate.field_bits(), "validated explicit domain parameters");
                candidate
            }
        })
    }

    /// Build named-curve parameters from a trusted table entry
    ///
    /// Runs the cheap structural checks but skips the primality tests.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn named(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: Point,
        n: BigUint,
        h: BigUint,
        oid: ObjectIdentifier,
        name: &'static str,
    ) -> Result<Self> {
        let params = Self::from_parts(p, a, b, g, n, h, Some(oid), Some(name));
        params.validate()?;
        Ok(params)
    }

    #[allow(clippy::too_many_arguments)]
    fn from_parts(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: Point,
        n: BigUint,
        h: BigUint,
        oid: Option<ObjectIdentifier>,
        name: Option<&'static str>,
    ) -> Self {
        let tau = ((p.bits() + 7) / 8) as usize;
        DomainParameters {
            p,
            a,
            b,
            g,
            n,
            h,
            oid,
            name,
            tau,
        }
    }

    fn validate(&self) -> Result<()> {
        let p = &self.p;
        validate::parameter(
            *p > BigUint::from(3u8) && p.bit(0),
            "domain parameters",
            "p must be an odd prime greater than 3",
        )?;
        validate::parameter(
            self.a < *p && self.b < *p,
            "domain parameters",
            "coefficients a and b must be in [0, p)",
        )?;

        // 4a³ + 27b² ≢ 0 (mod p)
        let a3 = mod_mul(&mod_mul(&self.a, &self.a, p), &self.a, p);
        let b2 = mod_mul(&self.b, &self.b, p);
        let discriminant = mod_add(
            &mod_mul(&BigUint::from(4u8), &a3, p),
            &mod_mul(&BigUint::from(27u8), &b2, p),
            p,
        );
        validate::parameter(!discriminant.is_zero(), "domain parameters", "curve is singular")?;

        validate::parameter(
            !self.g.is_infinity() && self.g.is_on_curve(self),
            "domain parameters",
            "generator is not a point on the curve",
        )?;
        validate::parameter(
            self.n > BigUint::one(),
            "domain parameters",
            "order n must be greater than 1",
        )?;
        validate::parameter(
            !self.h.is_zero(),
            "domain parameters",
            "cofactor must be positive",
        )?;
        Ok(())
    }

    /// True if both describe the same curve and generator, ignoring identifiers
    pub(crate) fn same_curve(&self, other: &DomainParameters) -> bool {
        self.p == other.p
            && self.a == other.a
            && self.b == other.b
            && self.g == other.g
            && self.n == other.n
            && self.h == other.h
    }

    /// Prime modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Generator G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Order n of the generator
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Object identifier, present for named curves
    pub fn oid(&self) -> Option<&ObjectIdentifier> {
        self.oid.as_ref()
    }

    /// Object identifier or a `NoSuchElement` error for anonymous curves
    pub fn require_oid(&self) -> Result<&ObjectIdentifier> {
        self.oid
            .as_ref()
            .ok_or_else(|| Error::missing("domain parameters", "no object identifier for curve"))
    }

    /// Registry name, present for named curves
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// τ = ceil(bitlength(p) / 8), the width of an encoded field element
    pub fn octet_length(&self) -> usize {
        self.tau
    }

    /// Bit length of p
    pub fn field_bits(&self) -> u64 {
        self.p.bits()
    }

    /// Width in bytes of a scalar modulo n
    pub fn order_octet_length(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }
}

impl fmt::Debug for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParameters")
            .field("name", &self.name)
            .field("oid", &self.oid.as_ref().map(ToString::to_string))
            .field("field_bits", &self.field_bits())
            .field("p", &format_args!("{:x}", self.p))
            .finish()
    }
}
