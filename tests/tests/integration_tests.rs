//! Cross-crate integration tests: keys travel through containers and feed
//! the signature, agreement and envelope schemes.

use std::sync::Arc;
use std::thread;

use eccard::algorithms::ec::{octets_to_point, registry};
use eccard::prelude::*;
use eccard::sign::ecdsa;
use eccard_tests::vectors::{self, sample};
use eccard_tests::{big, init_tracing, seeded_rng, toy_curve};
use rand::rngs::OsRng;

fn openssl_key_pair() -> (PrivateKey, PublicKey) {
    let private =
        PrivateKey::decode(&hex::decode(vectors::P256_PKCS8).unwrap(), KeyFormat::Pkcs8).unwrap();
    let public =
        PublicKey::decode(&hex::decode(vectors::P256_SPKI).unwrap(), KeyFormat::X509).unwrap();
    (private, public)
}

#[test]
fn test_openssl_containers_sign_and_verify() {
    init_tracing();
    let (private, public) = openssl_key_pair();
    assert_eq!(private.scalar(), &big(vectors::P256_D));
    assert_eq!(private.public_key().unwrap(), public);

    let signature = ecdsa::sign_deterministic(&private, b"sample").unwrap();
    assert_eq!(signature, EcdsaSignature::new(big(sample::R), big(sample::S)));
    assert!(Ecdsa::verify(b"sample", &signature, &public).is_ok());
}

#[test]
fn test_known_answer_with_supplied_nonce() {
    let (private, public) = openssl_key_pair();
    let signature = ecdsa::sign_with_k(&private, b"sample", &big(sample::K)).unwrap();
    assert_eq!(signature.r(), &big(sample::R));
    assert_eq!(signature.s(), &big(sample::S));
    assert!(ecdsa::verify_der(&public, b"sample", &signature.to_der().unwrap()));
}

#[test]
fn test_every_container_feeds_every_scheme() {
    init_tracing();
    let mut rng = seeded_rng(2024);

    for params in registry::named_curves() {
        let alice = PrivateKey::generate(Arc::clone(params), &mut rng);
        let bob = PrivateKey::generate(Arc::clone(params), &mut rng);

        for private_format in [KeyFormat::Card, KeyFormat::Pkcs8, KeyFormat::Sec1] {
            let alice_private =
                PrivateKey::decode(&alice.encode(private_format).unwrap(), private_format).unwrap();
            assert_eq!(alice_private, alice);

            for public_format in [KeyFormat::Card, KeyFormat::X509] {
                let encoded = alice.public_key().unwrap().encode(public_format).unwrap();
                let alice_public = PublicKey::decode(&encoded, public_format).unwrap();

                // signature
                let signature = Ecdsa::sign(b"container", &alice_private).unwrap();
                assert!(Ecdsa::verify(b"container", &signature, &alice_public).is_ok());

                // agreement
                let ab = Ecka::agree(&bob, &alice_public).unwrap();
                let ba = Ecka::agree(&alice_private, &bob.public_key().unwrap()).unwrap();
                assert_eq!(ab, ba);

                // envelope
                let envelope = alice_public.encipher(b"container", &mut rng).unwrap();
                assert_eq!(alice_private.decipher(&envelope).unwrap(), b"container");
            }
        }
    }
}

#[test]
fn test_anonymous_curve_through_the_stack() {
    let params = toy_curve();
    let key = PrivateKey::new(big("5"), Arc::clone(&params)).unwrap();
    let public = key.public_key().unwrap();

    // containers carrying explicit parameters work, the card template does not
    let pkcs8 = key.encode(KeyFormat::Pkcs8).unwrap();
    assert_eq!(PrivateKey::decode(&pkcs8, KeyFormat::Pkcs8).unwrap(), key);
    assert!(matches!(
        public.encode(KeyFormat::Card),
        Err(Error::NoSuchElement { .. })
    ));

    // the envelope needs a curve identifier
    let mut rng = seeded_rng(1);
    assert!(matches!(
        public.encipher(b"x", &mut rng),
        Err(Error::NoSuchElement { .. })
    ));

    // agreement does not
    let other = PrivateKey::new(big("7"), params).unwrap();
    let ab = Ecka::agree(&key, &other.public_key().unwrap()).unwrap();
    let ba = Ecka::agree(&other, &public).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn test_cross_curve_operations_fail() {
    let mut rng = seeded_rng(3);
    let p384 = PrivateKey::generate(named_curve("ansip384r1").unwrap(), &mut rng);
    let bp384 = PrivateKey::generate(named_curve("brainpoolP384r1").unwrap(), &mut rng);

    let err = Ecka::agree(&p384, &bp384.public_key().unwrap()).unwrap_err();
    assert_eq!(err.message(), "different domain parameter");

    let envelope = bp384.public_key().unwrap().encipher(b"x", &mut rng).unwrap();
    assert_eq!(p384.decipher(&envelope).unwrap_err(), Error::decipher());

    let signature = Ecdsa::sign(b"x", &p384).unwrap();
    assert!(Ecdsa::verify(b"x", &signature, &bp384.public_key().unwrap()).is_err());
}

#[test]
fn test_concrete_point_vectors() {
    let p256 = named_curve("ansix9p256r1").unwrap();
    let g = octets_to_point(&hex::decode(vectors::P256_G_COMPRESSED).unwrap(), &p256).unwrap();
    assert_eq!(g, Point::affine(big(vectors::P256_G.0), big(vectors::P256_G.1)));
    assert_eq!(&g, p256.generator());

    let toy = toy_curve();
    assert_eq!(
        octets_to_point(&[0x02, 0x05], &toy).unwrap(),
        Point::affine(big("5"), big("0"))
    );

    let q = PublicKey::from_octets(&hex::decode(vectors::P256_Q).unwrap(), p256).unwrap();
    assert_eq!(q.to_octets(PointFormat::Compressed).unwrap()[0], 0x03);
}

#[test]
fn test_shared_registry_across_threads() {
    let handles: Vec<_> = registry::named_curves()
        .iter()
        .map(|params| {
            let params = Arc::clone(params);
            thread::spawn(move || {
                let mut rng = OsRng;
                let key = PrivateKey::generate(params, &mut rng);
                let public = key.public_key().unwrap();
                let signature = ecdsa::sign_with_rng(&key, b"threads", &mut rng).unwrap();
                ecdsa::verify_signature(&public, b"threads", &signature)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    // lookups after concurrent use still hand out the shared instances
    assert!(Arc::ptr_eq(
        &named_curve("ansix9p256r1").unwrap(),
        &named_curve("ansix9p256r1").unwrap()
    ));
}

fn round_trip_signature<S: Signature>(
    secret: &S::SecretKey,
    public: &S::PublicKey,
    message: &[u8],
) -> bool {
    match S::sign(message, secret) {
        Ok(signature) => S::verify(message, &signature, public).is_ok(),
        Err(_) => false,
    }
}

fn round_trip_pke<P: Pke>(secret: &P::SecretKey, public: &P::PublicKey, message: &[u8]) -> bool {
    let mut rng = OsRng;
    match P::encrypt(public, message, &mut rng) {
        Ok(ciphertext) => P::decrypt(secret, &ciphertext).map(|m| m == message).unwrap_or(false),
        Err(_) => false,
    }
}

#[test]
fn test_generic_trait_usage() {
    let (private, public) = openssl_key_pair();
    assert!(round_trip_signature::<Ecdsa>(&private, &public, b"generic"));
    assert!(round_trip_pke::<Envelope>(&private, &public, b"generic"));
    assert_eq!(<Ecka as KeyAgreement>::name(), "ECKA");
}
