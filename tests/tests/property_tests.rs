//! Property tests over the public surface of the facade crate

use std::sync::Arc;

use eccard::algorithms::ec::{octets_to_point, DomainParameters};
use eccard::prelude::*;
use eccard::sign::ecdsa;
use eccard_tests::seeded_rng;
use num_bigint::BigUint;
use proptest::prelude::*;

fn curves() -> Vec<Arc<DomainParameters>> {
    ["ansix9p192r1", "ansix9p256r1", "brainpoolP256r1"]
        .iter()
        .map(|name| named_curve(name).unwrap())
        .collect()
}

fn scalar(bytes: &[u8], params: &DomainParameters) -> BigUint {
    // reduce into [1, n-1]
    BigUint::from_bytes_be(bytes) % (params.order() - 1u8) + 1u8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_scalar_multiplication_is_additive(
        a in proptest::collection::vec(any::<u8>(), 32),
        b in proptest::collection::vec(any::<u8>(), 32),
        curve in 0usize..3,
    ) {
        let params = &curves()[curve];
        let g = params.generator();
        let (a, b) = (scalar(&a, params), scalar(&b, params));
        let sum = (&a + &b) % params.order();

        let lhs = g.multiply(&a, params).unwrap().add(&g.multiply(&b, params).unwrap(), params).unwrap();
        let rhs = if sum == BigUint::from(0u8) {
            Point::Infinity
        } else {
            g.multiply(&sum, params).unwrap()
        };
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_point_codec_round_trip(k in proptest::collection::vec(any::<u8>(), 32), curve in 0usize..3) {
        let params = &curves()[curve];
        let point = params.generator().multiply(&scalar(&k, params), params).unwrap();
        let key = PublicKey::new(point.clone(), Arc::clone(params)).unwrap();

        for format in [PointFormat::Compressed, PointFormat::Uncompressed] {
            let octets = key.to_octets(format).unwrap();
            prop_assert_eq!(octets_to_point(&octets, params).unwrap(), point.clone());
        }
    }

    #[test]
    fn prop_group_laws(k in proptest::collection::vec(any::<u8>(), 32), curve in 0usize..3) {
        let params = &curves()[curve];
        let p = params.generator().multiply(&scalar(&k, params), params).unwrap();
        let q = params.generator().double(params).unwrap();

        prop_assert_eq!(p.add(&Point::Infinity, params).unwrap(), p.clone());
        prop_assert_eq!(Point::Infinity.add(&p, params).unwrap(), p.clone());
        prop_assert_eq!(p.add(&p.negate(params), params).unwrap(), Point::Infinity);
        prop_assert_eq!(p.add(&q, params).unwrap(), q.add(&p, params).unwrap());
    }

    #[test]
    fn prop_agreement_is_symmetric(seed in any::<u64>(), curve in 0usize..3) {
        let params = &curves()[curve];
        let mut rng = seeded_rng(seed);
        let a = PrivateKey::generate(Arc::clone(params), &mut rng);
        let b = PrivateKey::generate(Arc::clone(params), &mut rng);
        prop_assert_eq!(
            Ecka::agree(&a, &b.public_key().unwrap()).unwrap(),
            Ecka::agree(&b, &a.public_key().unwrap()).unwrap()
        );
    }

    #[test]
    fn prop_envelope_round_trip(message in proptest::collection::vec(any::<u8>(), 0..300), seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let key = PrivateKey::generate(named_curve("brainpoolP256r1").unwrap(), &mut rng);
        let envelope = key.public_key().unwrap().encipher(&message, &mut rng).unwrap();
        prop_assert_eq!(key.decipher(&envelope).unwrap(), message);
    }

    #[test]
    fn prop_signature_rejects_other_messages(
        message in proptest::collection::vec(any::<u8>(), 0..64),
        extra in any::<u8>(),
        seed in any::<u64>(),
    ) {
        let mut rng = seeded_rng(seed);
        let key = PrivateKey::generate(named_curve("ansix9p256r1").unwrap(), &mut rng);
        let public = key.public_key().unwrap();
        let signature = ecdsa::sign_with_rng(&key, &message, &mut rng).unwrap();

        prop_assert!(ecdsa::verify_signature(&public, &message, &signature));
        let mut longer = message.clone();
        longer.push(extra);
        prop_assert!(!ecdsa::verify_signature(&public, &longer, &signature));
    }
}
