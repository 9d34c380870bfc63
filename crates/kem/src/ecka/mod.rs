//! ECKA: the shared point d·Q and its x-coordinate octets

use eccard_algorithms::ec::{field_element_to_octets, Point};
use eccard_api::{Error, KeyAgreement, Result};
use eccard_keys::{PrivateKey, PublicKey};
use tracing::debug;
use zeroize::Zeroizing;

const CONTEXT: &str = "ECKA";

/// ECKA as a [`KeyAgreement`] scheme
pub struct Ecka;

/// Compute the shared point d·Q
///
/// Both keys must carry identical domain parameters. The check does not depend
/// on argument roles, so a mismatch fails the same way for either party.
pub fn ecka(private_key: &PrivateKey, public_key: &PublicKey) -> Result<Point> {
    let params = private_key.params();
    if **params != **public_key.params() {
        return Err(Error::invalid_argument(CONTEXT, "different domain parameter"));
    }
    // unreachable while PublicKey::new rejects off-curve points
    if !public_key.point().is_on_curve(params) {
        return Err(Error::invalid_argument(CONTEXT, "invalid public key"));
    }

    debug!(curve = params.name().unwrap_or("explicit"), "key agreement");
    let shared = public_key.point().multiply(private_key.scalar(), params)?;
    if shared.is_infinity() {
        return Err(Error::invalid_argument(
            CONTEXT,
            "shared secret is the point at infinity",
        ));
    }
    Ok(shared)
}

/// x-coordinate of [`ecka`] as a field-length octet string
pub fn shared_secret(private_key: &PrivateKey, public_key: &PublicKey) -> Result<Zeroizing<Vec<u8>>> {
    let shared = ecka(private_key, public_key)?;
    match shared.x() {
        Some(x) => Ok(Zeroizing::new(field_element_to_octets(x, private_key.params())?)),
        None => Err(Error::invalid_argument(
            CONTEXT,
            "shared secret is the point at infinity",
        )),
    }
}

impl KeyAgreement for Ecka {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;

    fn name() -> &'static str {
        "ECKA"
    }

    fn agree(secret_key: &Self::SecretKey, peer: &Self::PublicKey) -> Result<Zeroizing<Vec<u8>>> {
        shared_secret(secret_key, peer)
    }
}
