//! Process-wide registry of named curves
//!
//! Built lazily from the constant table in `eccard-params` on first use and
//! read-only afterwards.

use std::sync::Arc;

use eccard_params::{NamedCurve, NAMED_CURVES};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use tracing::{debug, error};

use super::domain::DomainParameters;
use super::point::Point;
use crate::encoding::ObjectIdentifier;
use crate::error::{Error, Result};

static REGISTRY: Lazy<Vec<Arc<DomainParameters>>> = Lazy::new(|| {
    let curves: Vec<_> = NAMED_CURVES
        .iter()
        .filter_map(|curve| match build(curve) {
            Ok(params) => Some(Arc::new(params)),
            Err(e) => {
                error!(curve = curve.name, error = %e, "rejected named curve table entry");
                None
            }
        })
        .collect();
    debug!(count = curves.len(), "initialised named curve registry");
    curves
});

fn hex(value: &'static str) -> Result<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 16)
        .ok_or_else(|| Error::encoding("named curve table", "invalid hex constant"))
}

fn build(curve: &NamedCurve) -> Result<DomainParameters> {
    DomainParameters::named(
        hex(curve.p)?,
        hex(curve.a)?,
        hex(curve.b)?,
        Point::affine(hex(curve.g_x)?, hex(curve.g_y)?),
        hex(curve.n)?,
        BigUint::from(curve.h),
        curve.oid.parse::<ObjectIdentifier>()?,
        curve.name,
    )
}

/// All named curves, in table order
pub fn named_curves() -> &'static [Arc<DomainParameters>] {
    &REGISTRY
}

/// Look up a named curve by its registry name, e.g. `"ansix9p256r1"`
pub fn by_name(name: &str) -> Result<Arc<DomainParameters>> {
    named_curves()
        .iter()
        .find(|params| params.name() == Some(name))
        .cloned()
        .ok_or_else(|| Error::missing("named curve registry", format!("unknown curve name {}", name)))
}

/// Look up a named curve by its object identifier
pub fn by_oid(oid: &ObjectIdentifier) -> Result<Arc<DomainParameters>> {
    named_curves()
        .iter()
        .find(|params| params.oid() == Some(oid))
        .cloned()
        .ok_or_else(|| Error::param("named curve registry", format!("unknown curve identifier {}", oid)))
}
