//! ECDSA over runtime domain parameters
//!
//! This implementation follows ANSI X9.62 and FIPS 186-4, Section 6. The
//! message digest is chosen from the size of the underlying field (see
//! [`HashAlgorithm::for_field_bits`]) and truncated to the bit length of the
//! group order n before use.
//!
//! Three ways to obtain the per-signature nonce k are offered:
//! - [`sign_with_rng`] draws k uniformly from `[1, n-1]`
//! - [`sign_with_k`] takes k from the caller (known-answer tests, card replay)
//! - [`sign_deterministic`] derives k from the key and the digest per RFC 6979
//!
//! None of them retries: a zero r or s is reported to the caller.

use eccard_algorithms::ec::field::{mod_add, mod_inverse, mod_mul};
use eccard_algorithms::ec::{self, DomainParameters, Point};
use eccard_algorithms::HashAlgorithm;
use eccard_api::{Error, Result, Signature as SignatureTrait};
use eccard_keys::{PrivateKey, PublicKey};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::debug;

mod rfc6979;
mod signature;

pub use signature::EcdsaSignature;

const SIGN_CONTEXT: &str = "ECDSA sign";

/// ECDSA as a [`Signature`](eccard_api::Signature) scheme
///
/// The trait entry point signs deterministically (RFC 6979) so that it needs
/// no random source.
pub struct Ecdsa;

/// Digest algorithm used for keys on the given curve
pub fn hash_algorithm(params: &DomainParameters) -> HashAlgorithm {
    HashAlgorithm::for_field_bits(params.field_bits())
}

/// Hash a message to the integer e that enters the signature equation
///
/// The digest is interpreted big-endian and only its leftmost `bitlen(n)`
/// bits are kept.
pub fn calculate_hash_value(message: &[u8], params: &DomainParameters) -> BigUint {
    let digest = hash_algorithm(params).digest(message);
    bits_to_int(&digest, params.order().bits())
}

/// Leftmost `qlen` bits of `bytes` as an unsigned integer
pub(crate) fn bits_to_int(bytes: &[u8], qlen: u64) -> BigUint {
    let x = BigUint::from_bytes_be(bytes);
    let blen = bytes.len() as u64 * 8;
    if blen > qlen {
        x >> (blen - qlen)
    } else {
        x
    }
}

/// Sign with a caller-supplied nonce
///
/// k must lie in `[1, n-1]`. The same (key, message, k) always yields the
/// same signature, which makes this the entry point for known-answer tests.
pub fn sign_with_k(key: &PrivateKey, message: &[u8], k: &BigUint) -> Result<EcdsaSignature> {
    let e = calculate_hash_value(message, key.params());
    sign_integer(key, &e, k)
}

/// Sign with a nonce drawn uniformly from `[1, n-1]`
pub fn sign_with_rng<R: CryptoRng + RngCore>(
    key: &PrivateKey,
    message: &[u8],
    rng: &mut R,
) -> Result<EcdsaSignature> {
    let k = ec::random_scalar(key.params(), rng);
    sign_with_k(key, message, &k)
}

/// Sign with the deterministic nonce of RFC 6979
///
/// The HMAC inside the nonce generator uses the same digest as the message hash.
pub fn sign_deterministic(key: &PrivateKey, message: &[u8]) -> Result<EcdsaSignature> {
    let params = key.params();
    let hash = hash_algorithm(params);
    let digest = hash.digest(message);
    let k = rfc6979::generate_k(hash, key.scalar(), &digest, params.order())?;
    let e = bits_to_int(&digest, params.order().bits());
    sign_integer(key, &e, &k)
}

/// Sign with a random nonce and return the DER `SEQUENCE { r, s }` directly
pub fn sign_der<R: CryptoRng + RngCore>(
    key: &PrivateKey,
    message: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    sign_with_rng(key, message, rng)?.to_der()
}

/// Core signature equation for a hashed message
///
/// Algorithm:
/// 1. Require 1 ≤ k ≤ n-1
/// 2. (x₁, y₁) = k·G, r = x₁ mod n; reject r = 0
/// 3. s = k⁻¹(e + r·d) mod n; reject s = 0
///
/// A k that is not invertible modulo n surfaces as the arithmetic error of
/// the inversion.
fn sign_integer(key: &PrivateKey, e: &BigUint, k: &BigUint) -> Result<EcdsaSignature> {
    let params = key.params();
    let n = params.order();

    if k.is_zero() {
        return Err(Error::invalid_argument(SIGN_CONTEXT, "factor k not in range"));
    }
    if k >= n {
        return Err(Error::invalid_argument(
            SIGN_CONTEXT,
            "factor k greater or equal to order n",
        ));
    }

    debug!(
        curve = params.name().unwrap_or("explicit"),
        hash = hash_algorithm(params).name(),
        "ECDSA sign"
    );

    let kg = params.generator().multiply(k, params)?;
    let r = match kg.x() {
        Some(x1) => x1 % n,
        None => BigUint::zero(),
    };
    if r.is_zero() {
        return Err(Error::invalid_argument(SIGN_CONTEXT, "0 == r"));
    }

    let k_inv = mod_inverse(k, n)?;
    let rd = mod_mul(&r, key.scalar(), n);
    let s = mod_mul(&k_inv, &mod_add(&(e % n), &rd, n), n);
    if s.is_zero() {
        return Err(Error::invalid_argument(SIGN_CONTEXT, "0 == s"));
    }

    Ok(EcdsaSignature::new(r, s))
}

/// Verify a signature over an already hashed message
///
/// Algorithm:
/// 1. Verify that r and s are integers in [1, n-1]
/// 2. w = s⁻¹ mod n
/// 3. u₁ = e·w mod n and u₂ = r·w mod n
/// 4. (x₁, y₁) = u₁·G + u₂·Q; reject the point at infinity
/// 5. Accept if and only if x₁ mod n = r
///
/// Malformed signatures are rejected with `false`, never with an error.
pub fn verify_hash(key: &PublicKey, e: &BigUint, signature: &EcdsaSignature) -> bool {
    let params = key.params();
    let n = params.order();
    let (r, s) = (signature.r(), signature.s());

    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        debug!("ECDSA verify: component out of range");
        return false;
    }
    if key.point().is_infinity() {
        return false;
    }

    let w = match mod_inverse(s, n) {
        Ok(w) => w,
        Err(_) => return false,
    };
    let u1 = mod_mul(&(e % n), &w, n);
    let u2 = mod_mul(r, &w, n);

    let point = match Point::linear_combination(&u1, params.generator(), &u2, key.point(), params)
    {
        Ok(point) => point,
        Err(_) => return false,
    };
    match point.x() {
        Some(x1) => (x1 % n) == *r,
        None => {
            debug!("ECDSA verify: verification point is the point at infinity");
            false
        }
    }
}

/// Verify a signature over a message
pub fn verify_signature(key: &PublicKey, message: &[u8], signature: &EcdsaSignature) -> bool {
    let e = calculate_hash_value(message, key.params());
    verify_hash(key, &e, signature)
}

/// Verify a DER-framed signature; malformed DER yields `false`
pub fn verify_der(key: &PublicKey, message: &[u8], der: &[u8]) -> bool {
    match EcdsaSignature::from_der(der) {
        Ok(signature) => verify_signature(key, message, &signature),
        Err(_) => {
            debug!("ECDSA verify: malformed DER signature");
            false
        }
    }
}

impl SignatureTrait for Ecdsa {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = EcdsaSignature;

    fn name() -> &'static str {
        "ECDSA"
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        sign_deterministic(secret_key, message)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        if verify_signature(public_key, message, signature) {
            Ok(())
        } else {
            Err(Error::InvalidSignature {
                context: "ECDSA verify",
            })
        }
    }
}
