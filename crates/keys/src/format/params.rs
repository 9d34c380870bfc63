//! ECParameters (RFC 5480 / X9.62) and the id-ecPublicKey algorithm identifier
//!
//! Named curves are written as their object identifier. Curves without one
//! are written as an explicit prime-field `SpecifiedECDomain`:
//!
//! ```text
//! SEQUENCE {
//!   version  INTEGER (1),
//!   fieldID  SEQUENCE { prime-field OID, p INTEGER },
//!   curve    SEQUENCE { a OCTET STRING, b OCTET STRING, seed BIT STRING OPTIONAL },
//!   base     OCTET STRING,
//!   order    INTEGER,
//!   cofactor INTEGER OPTIONAL
//! }
//! ```

use std::sync::Arc;

use der::asn1::{Any, AnyRef, BitString, ObjectIdentifier, OctetString, Uint};
use der::{Choice, Decode, Encode, Sequence};
use eccard_algorithms::ec::{codec, registry, DomainParameters};
use eccard_api::{Error, Result};
use eccard_params::tags;
use num_bigint::BigUint;
use spki::AlgorithmIdentifierRef;

use super::asn1;

const CONTEXT: &str = "EC parameters";

const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap(tags::oid::EC_PUBLIC_KEY);
const ID_PRIME_FIELD: ObjectIdentifier = ObjectIdentifier::new_unwrap(tags::oid::PRIME_FIELD);

const SPECIFIED_DOMAIN_VERSION: u8 = 1;

/// `ECParameters ::= CHOICE { namedCurve, specifiedCurve }`
#[derive(Clone, Debug, Eq, PartialEq, Choice)]
pub(crate) enum EcParameters {
    NamedCurve(ObjectIdentifier),
    Specified(SpecifiedDomain),
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub(crate) struct SpecifiedDomain {
    version: u8,
    field_id: FieldId,
    curve: Curve,
    base: OctetString,
    order: Uint,
    cofactor: Option<Uint>,
}

// `parameters` stays open so that other field types fail on the type check
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct FieldId {
    field_type: ObjectIdentifier,
    parameters: Any,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct Curve {
    a: OctetString,
    b: OctetString,
    seed: Option<BitString>,
}

impl EcParameters {
    /// The named curve identifier, or an explicit domain for anonymous curves
    pub(crate) fn from_domain(params: &DomainParameters) -> Result<Self> {
        if let Some(oid) = params.oid() {
            return Ok(EcParameters::NamedCurve(*oid));
        }

        let prime = uint(params.p())?.to_der().map_err(asn1(CONTEXT))?;
        Ok(EcParameters::Specified(SpecifiedDomain {
            version: SPECIFIED_DOMAIN_VERSION,
            field_id: FieldId {
                field_type: ID_PRIME_FIELD,
                parameters: Any::from_der(&prime).map_err(asn1(CONTEXT))?,
            },
            curve: Curve {
                a: octet_string(codec::field_element_to_octets(params.a(), params)?)?,
                b: octet_string(codec::field_element_to_octets(params.b(), params)?)?,
                seed: None,
            },
            base: octet_string(codec::point_to_uncompressed(params.generator(), params)?)?,
            order: uint(params.order())?,
            cofactor: Some(uint(params.cofactor())?),
        }))
    }

    /// Resolve to domain parameters; explicit domains go through full validation
    pub(crate) fn to_domain(&self) -> Result<Arc<DomainParameters>> {
        let domain = match self {
            EcParameters::NamedCurve(oid) => return Ok(registry::by_oid(oid)?),
            EcParameters::Specified(domain) => domain,
        };

        if domain.version != SPECIFIED_DOMAIN_VERSION {
            return Err(Error::invalid_argument(
                CONTEXT,
                "unsupported specified domain version",
            ));
        }
        if domain.field_id.field_type != ID_PRIME_FIELD {
            return Err(Error::invalid_argument(CONTEXT, "only prime fields are supported"));
        }
        let prime = domain.field_id.parameters.to_der().map_err(asn1(CONTEXT))?;
        let p = BigUint::from_bytes_be(Uint::from_der(&prime).map_err(asn1(CONTEXT))?.as_bytes());

        let a = codec::octets_to_field_element(domain.curve.a.as_bytes());
        let b = codec::octets_to_field_element(domain.curve.b.as_bytes());
        let g = codec::octets_to_point_with_prime(domain.base.as_bytes(), &p)?;
        let n = BigUint::from_bytes_be(domain.order.as_bytes());
        let h = domain
            .cofactor
            .as_ref()
            .map(|h| BigUint::from_bytes_be(h.as_bytes()))
            .ok_or_else(|| Error::invalid_argument(CONTEXT, "cofactor missing"))?;

        Ok(Arc::new(DomainParameters::new(p, a, b, g, n, h)?))
    }
}

fn uint(value: &BigUint) -> Result<Uint> {
    Uint::new(&value.to_bytes_be()).map_err(asn1(CONTEXT))
}

fn octet_string(bytes: Vec<u8>) -> Result<OctetString> {
    OctetString::new(bytes).map_err(asn1(CONTEXT))
}

/// DER of the ECParameters for `params`
pub(crate) fn encode(params: &DomainParameters) -> Result<Vec<u8>> {
    EcParameters::from_domain(params)?
        .to_der()
        .map_err(asn1(CONTEXT))
}

/// `AlgorithmIdentifier { id-ecPublicKey, ECParameters }` over encoded parameters
pub(crate) fn algorithm_identifier(parameters: &[u8]) -> Result<AlgorithmIdentifierRef<'_>> {
    Ok(AlgorithmIdentifierRef {
        oid: ID_EC_PUBLIC_KEY,
        parameters: Some(AnyRef::from_der(parameters).map_err(asn1(CONTEXT))?),
    })
}

/// Check an id-ecPublicKey algorithm identifier and resolve its parameters
pub(crate) fn parse_algorithm_identifier(
    algorithm: &AlgorithmIdentifierRef<'_>,
) -> Result<Arc<DomainParameters>> {
    if algorithm.oid != ID_EC_PUBLIC_KEY {
        return Err(Error::invalid_argument("algorithm identifier", "not an EC key"));
    }
    let parameters = algorithm
        .parameters
        .as_ref()
        .ok_or_else(|| Error::invalid_argument("algorithm identifier", "domain parameters missing"))?
        .to_der()
        .map_err(asn1(CONTEXT))?;
    EcParameters::from_der(&parameters)
        .map_err(asn1(CONTEXT))?
        .to_domain()
}
