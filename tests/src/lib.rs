//! Shared fixtures for the eccard integration tests
pub mod vectors;

use std::sync::Arc;

use eccard_algorithms::ec::{DomainParameters, Point};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Install a test-friendly `tracing` subscriber; repeated calls are harmless
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Reproducible RNG for a test
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Parse a hex integer, panicking on malformed fixtures
pub fn big(hex_str: &str) -> BigUint {
    BigUint::parse_bytes(hex_str.as_bytes(), 16).expect("fixture is valid hex")
}

/// p = 43, a = 18, b = 0, G = (2, 1), n = 11, h = 4
///
/// Small enough to check by hand. It has no object identifier, which makes
/// it the anonymous curve of the test suite.
pub fn toy_curve() -> Arc<DomainParameters> {
    Arc::new(
        DomainParameters::new(
            BigUint::from(43u8),
            BigUint::from(18u8),
            BigUint::from(0u8),
            Point::affine(BigUint::from(2u8), BigUint::from(1u8)),
            BigUint::from(11u8),
            BigUint::from(4u8),
        )
        .expect("toy curve parameters are valid"),
    )
}
