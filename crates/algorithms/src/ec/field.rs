//! Arithmetic in prime fields F_p and in Z/nZ
//!
//! All helpers take and return canonical representatives in `[0, m)` except
//! where stated. Inputs that are not reduced are reduced first.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

/// (a · b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Multiplicative inverse of `a` modulo `m`
///
/// Uses the extended Euclidean algorithm. A value sharing a factor with `m`
/// (including zero) has no inverse and yields [`Error::Arithmetic`].
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let value = BigInt::from_biguint(Sign::Plus, a % m);

    let egcd = value.extended_gcd(&modulus);
    if !egcd.gcd.is_one() {
        return Err(Error::Arithmetic {
            operation: "modular inverse",
            details: "BigInteger not invertible",
        });
    }

    egcd.x
        .mod_floor(&modulus)
        .to_biguint()
        .ok_or(Error::Arithmetic {
            operation: "modular inverse",
            details: "BigInteger not invertible",
        })
}

/// Square root of `alpha` in F_p for primes p ≡ 3 (mod 4)
///
/// The candidate root is alpha^((p+1)/4); it is returned only if it squares
/// back to alpha. Which of the two roots is returned is unspecified.
pub fn sqrt_3_mod_4(alpha: &BigUint, p: &BigUint) -> Result<BigUint> {
    let three = BigUint::from(3u8);
    let four = BigUint::from(4u8);
    if p % &four != three {
        return Err(Error::param(
            "square root",
            "cannot calculate square root, use uncompressed encoding",
        ));
    }

    let alpha = alpha % p;
    let exponent = (p + BigUint::one()) >> 2;
    let beta = alpha.modpow(&exponent, p);
    if mod_mul(&beta, &beta, p) != alpha {
        return Err(Error::param("square root", "alpha is not a square in Fp"));
    }
    Ok(beta)
}

const SMALL_PRIMES: [u32; 24] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
];

/// Probabilistic primality test (trial division followed by Miller-Rabin)
///
/// Uses the small primes above as fixed witnesses, which makes the result
/// deterministic for a given input. The error probability for a composite
/// is below 4^-24.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u8);
    if *n < two {
        return false;
    }
    for &sp in SMALL_PRIMES.iter() {
        let sp = BigUint::from(sp);
        if *n == sp {
            return true;
        }
        if (n % &sp).is_zero() {
            return false;
        }
    }

    // n - 1 = d · 2^s with d odd
    let n_minus_one = n - BigUint::one();
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &base in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = mod_mul(&x, &x, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
