//! Elliptic curve point operations over runtime domain parameters
//!
//! The group law is defined for the short Weierstrass curve
//! y² = x³ + a·x + b over F_p. Public operations work on affine points;
//! scalar multiplication runs a Montgomery ladder in Jacobian coordinates
//! and converts back with a single inversion.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::domain::DomainParameters;
use super::field::{mod_add, mod_inverse, mod_mul, mod_sub};
use crate::error::{Error, Result};

/// A curve point: the point at infinity or an affine pair
///
/// A point is not bound to a curve; whether it lies on a given curve is
/// checked with [`Point::is_on_curve`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The additive identity O
    Infinity,
    /// Affine coordinates (x, y)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create an affine point
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The affine x-coordinate, `None` for the point at infinity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The affine y-coordinate, `None` for the point at infinity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Check the curve equation y² ≡ x³ + a·x + b (mod p)
    ///
    /// The point at infinity is on every curve. Coordinates outside `[0, p)`
    /// are rejected.
    pub fn is_on_curve(&self, params: &DomainParameters) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = params.p();
                if x >= p || y >= p {
                    return false;
                }
                let lhs = mod_mul(y, y, p);
                let rhs = curve_rhs(x, params);
                lhs == rhs
            }
        }
    }

    /// -P = (x, p - y); -O = O
    pub fn negate(&self, params: &DomainParameters) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => {
                let p = params.p();
                Point::Affine {
                    x: x % p,
                    y: mod_sub(&BigUint::zero(), y, p),
                }
            }
        }
    }

    /// Group law P + Q
    ///
    /// Cases, in order: O + O = O, O + Q = Q, P + O = P, P + (-P) = O,
    /// doubling for P = Q, chord otherwise. Coordinates of the result are
    /// reduced into `[0, p)`.
    pub fn add(&self, other: &Point, params: &DomainParameters) -> Result<Point> {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Infinity, Point::Infinity) => return Ok(Point::Infinity),
            (Point::Infinity, q) => return Ok(q.reduced(params)),
            (p, Point::Infinity) => return Ok(p.reduced(params)),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                let p = params.p();
                (x1 % p, y1 % p, x2 % p, y2 % p)
            }
        };
        let p = params.p();

        if x1 == x2 && mod_add(&y1, &y2, p).is_zero() {
            return Ok(Point::Infinity);
        }

        let lambda = if x1 == x2 {
            // tangent: (3x² + a) / 2y
            let numerator = mod_add(
                &mod_mul(&BigUint::from(3u8), &mod_mul(&x1, &x1, p), p),
                params.a(),
                p,
            );
            let denominator = mod_add(&y1, &y1, p);
            mod_mul(&numerator, &mod_inverse(&denominator, p)?, p)
        } else {
            // chord: (y2 - y1) / (x2 - x1)
            let numerator = mod_sub(&y2, &y1, p);
            let denominator = mod_sub(&x2, &x1, p);
            mod_mul(&numerator, &mod_inverse(&denominator, p)?, p)
        };

        let x3 = mod_sub(&mod_sub(&mod_mul(&lambda, &lambda, p), &x1, p), &x2, p);
        let y3 = mod_sub(&mod_mul(&lambda, &mod_sub(&x1, &x3, p), p), &y1, p);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Point doubling 2P
    pub fn double(&self, params: &DomainParameters) -> Result<Point> {
        self.add(self, params)
    }

    /// Scalar multiplication k·P
    ///
    /// For P = O the result is O for every k. Otherwise k must satisfy
    /// 1 ≤ k ≤ n; k = n yields O for a point of order n.
    pub fn multiply(&self, k: &BigUint, params: &DomainParameters) -> Result<Point> {
        if self.is_infinity() {
            return Ok(Point::Infinity);
        }
        if k.is_zero() || k > params.order() {
            return Err(Error::param("multiply", "factor k not in range [1, n]"));
        }
        self.mul_unchecked(k, params)
    }

    /// Scalar multiplication without range check on k
    ///
    /// Montgomery ladder: every bit of k costs one addition and one doubling.
    pub(crate) fn mul_unchecked(&self, k: &BigUint, params: &DomainParameters) -> Result<Point> {
        if self.is_infinity() || k.is_zero() {
            return Ok(Point::Infinity);
        }

        let mut r0 = Jacobian::infinity();
        let mut r1 = Jacobian::from_affine(self, params);
        for i in (0..k.bits()).rev() {
            if k.bit(i) {
                r0 = r0.add(&r1, params);
                r1 = r1.double(params);
            } else {
                r1 = r0.add(&r1, params);
                r0 = r0.double(params);
            }
        }
        r0.to_affine(params)
    }

    /// u1·G + u2·Q for arbitrary scalars, as needed by signature verification
    pub fn linear_combination(
        u1: &BigUint,
        g: &Point,
        u2: &BigUint,
        q: &Point,
        params: &DomainParameters,
    ) -> Result<Point> {
        let a = g.mul_unchecked(u1, params)?;
        let b = q.mul_unchecked(u2, params)?;
        a.add(&b, params)
    }

    fn reduced(&self, params: &DomainParameters) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x % params.p(),
                y: y % params.p(),
            },
        }
    }
}

/// x³ + a·x + b mod p
pub(crate) fn curve_rhs(x: &BigUint, params: &DomainParameters) -> BigUint {
    let p = params.p();
    let x2 = mod_mul(x, x, p);
    let x3 = mod_mul(&x2, x, p);
    let ax = mod_mul(params.a(), x, p);
    mod_add(&mod_add(&x3, &ax, p), params.b(), p)
}

/// Jacobian projective coordinates (X:Y:Z) with x = X/Z² and y = Y/Z³; Z = 0 is O
#[derive(Clone, Debug)]
struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    fn infinity() -> Self {
        Jacobian {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn from_affine(point: &Point, params: &DomainParameters) -> Self {
        match point {
            Point::Infinity => Self::infinity(),
            Point::Affine { x, y } => Jacobian {
                x: x % params.p(),
                y: y % params.p(),
                z: BigUint::one(),
            },
        }
    }

    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    fn to_affine(&self, params: &DomainParameters) -> Result<Point> {
        if self.is_infinity() {
            return Ok(Point::Infinity);
        }
        let p = params.p();
        let z_inv = mod_inverse(&self.z, p)?;
        let z_inv2 = mod_mul(&z_inv, &z_inv, p);
        let z_inv3 = mod_mul(&z_inv2, &z_inv, p);
        Ok(Point::Affine {
            x: mod_mul(&self.x, &z_inv2, p),
            y: mod_mul(&self.y, &z_inv3, p),
        })
    }

    fn double(&self, params: &DomainParameters) -> Self {
        let p = params.p();
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity();
        }

        let xx = mod_mul(&self.x, &self.x, p);
        let yy = mod_mul(&self.y, &self.y, p);
        let yyyy = mod_mul(&yy, &yy, p);
        let zz = mod_mul(&self.z, &self.z, p);

        // S = 4·X·Y²
        let s = mod_mul(&BigUint::from(4u8), &mod_mul(&self.x, &yy, p), p);
        // M = 3·X² + a·Z⁴
        let m = mod_add(
            &mod_mul(&BigUint::from(3u8), &xx, p),
            &mod_mul(params.a(), &mod_mul(&zz, &zz, p), p),
            p,
        );

        let x3 = mod_sub(&mod_mul(&m, &m, p), &mod_add(&s, &s, p), p);
        let y3 = mod_sub(
            &mod_mul(&m, &mod_sub(&s, &x3, p), p),
            &mod_mul(&BigUint::from(8u8), &yyyy, p),
            p,
        );
        let z3 = mod_mul(&mod_add(&self.y, &self.y, p), &self.z, p);

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn add(&self, other: &Self, params: &DomainParameters) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }
        let p = params.p();

        let z1z1 = mod_mul(&self.z, &self.z, p);
        let z2z2 = mod_mul(&other.z, &other.z, p);
        let u1 = mod_mul(&self.x, &z2z2, p);
        let u2 = mod_mul(&other.x, &z1z1, p);
        let s1 = mod_mul(&self.y, &mod_mul(&other.z, &z2z2, p), p);
        let s2 = mod_mul(&other.y, &mod_mul(&self.z, &z1z1, p), p);

        if u1 == u2 {
            if s1 == s2 {
                return self.double(params);
            }
            return Self::infinity();
        }

        let h = mod_sub(&u2, &u1, p);
        let r = mod_sub(&s2, &s1, p);
        let hh = mod_mul(&h, &h, p);
        let hhh = mod_mul(&h, &hh, p);
        let v = mod_mul(&u1, &hh, p);

        let x3 = mod_sub(&mod_sub(&mod_mul(&r, &r, p), &hhh, p), &mod_add(&v, &v, p), p);
        let y3 = mod_sub(
            &mod_mul(&r, &mod_sub(&v, &x3, p), p),
            &mod_mul(&s1, &hhh, p),
            p,
        );
        let z3 = mod_mul(&mod_mul(&self.z, &other.z, p), &h, p);

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
