//! Deterministic nonce generation (RFC 6979, Section 3.2)

use eccard_algorithms::HashAlgorithm;
use eccard_api::{Error, Result};
use hmac::{Mac, SimpleHmac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::digest::core_api::BlockSizeUser;
use sha2::digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use tracing::trace;
use zeroize::Zeroizing;

use super::bits_to_int;

/// Derive k in `[1, n-1]` from the private scalar x and the message digest
pub(crate) fn generate_k(
    hash: HashAlgorithm,
    x: &BigUint,
    digest: &[u8],
    n: &BigUint,
) -> Result<BigUint> {
    match hash {
        HashAlgorithm::Sha256 => generate::<Sha256>(x, digest, n),
        HashAlgorithm::Sha384 => generate::<Sha384>(x, digest, n),
        HashAlgorithm::Sha512 => generate::<Sha512>(x, digest, n),
    }
}

fn generate<D: Digest + BlockSizeUser>(x: &BigUint, digest: &[u8], n: &BigUint) -> Result<BigUint> {
    let qlen = n.bits();
    let rolen = ((qlen + 7) / 8) as usize;
    let x_octets = int_to_octets(x, rolen);
    let h_octets = int_to_octets(&(bits_to_int(digest, qlen) % n), rolen);

    let hlen = <D as Digest>::output_size();
    let mut v = Zeroizing::new(vec![0x01u8; hlen]);
    let mut k = Zeroizing::new(vec![0x00u8; hlen]);

    k = hmac::<D>(&k, &[v.as_slice(), &[0x00], x_octets.as_slice(), h_octets.as_slice()])?;
    v = hmac::<D>(&k, &[v.as_slice()])?;
    k = hmac::<D>(&k, &[v.as_slice(), &[0x01], x_octets.as_slice(), h_octets.as_slice()])?;
    v = hmac::<D>(&k, &[v.as_slice()])?;

    loop {
        let mut t = Zeroizing::new(Vec::with_capacity(rolen + hlen));
        while (t.len() as u64) * 8 < qlen {
            v = hmac::<D>(&k, &[v.as_slice()])?;
            t.extend_from_slice(&v);
        }

        let candidate = bits_to_int(&t, qlen);
        if !candidate.is_zero() && candidate < *n {
            return Ok(candidate);
        }
        trace!("nonce candidate out of range");
        k = hmac::<D>(&k, &[v.as_slice(), &[0x00]])?;
        v = hmac::<D>(&k, &[v.as_slice()])?;
    }
}

fn hmac<D: Digest + BlockSizeUser>(key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .map_err(|_| Error::invalid_argument("RFC 6979", "invalid HMAC key length"))?;
    for part in parts {
        mac.update(part);
    }
    Ok(Zeroizing::new(mac.finalize().into_bytes().to_vec()))
}

// Big-endian, left-padded to `len` octets; x < n so it always fits
fn int_to_octets(x: &BigUint, len: usize) -> Zeroizing<Vec<u8>> {
    let bytes = Zeroizing::new(x.to_bytes_be());
    let mut out = Zeroizing::new(vec![0u8; len.saturating_sub(bytes.len())]);
    out.extend_from_slice(&bytes);
    out
}
