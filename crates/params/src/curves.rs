//! Named elliptic curves over prime fields
//!
//! Domain parameters are big-endian hex strings, as published in FIPS 186-4,
//! SEC 2 and RFC 5639. Every curve here has a prime order subgroup of cofactor 1.

/// Domain parameters of a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCurve {
    /// Registry name of the curve
    pub name: &'static str,
    /// Dotted object identifier
    pub oid: &'static str,
    /// Prime modulus p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
    /// Order n of the generator
    pub n: &'static str,
    /// Cofactor h
    pub h: u32,
}

/// NIST P-192 (secp192r1)
pub const ANSIX9P192R1: NamedCurve = NamedCurve {
    name: "ansix9p192r1",
    oid: "1.2.840.10045.3.1.1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    g_x: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    g_y: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    n: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
    h: 1,
};

/// NIST P-224 (secp224r1)
pub const ANSIP224R1: NamedCurve = NamedCurve {
    name: "ansip224r1",
    oid: "1.3.132.0.33",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    g_x: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    g_y: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    h: 1,
};

/// NIST P-256 (secp256r1)
pub const ANSIX9P256R1: NamedCurve = NamedCurve {
    name: "ansix9p256r1",
    oid: "1.2.840.10045.3.1.7",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    g_x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    g_y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: 1,
};

/// NIST P-384 (secp384r1)
pub const ANSIP384R1: NamedCurve = NamedCurve {
    name: "ansip384r1",
    oid: "1.3.132.0.34",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    g_x: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    g_y: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    h: 1,
};

/// NIST P-521 (secp521r1)
pub const ANSIP521R1: NamedCurve = NamedCurve {
    name: "ansip521r1",
    oid: "1.3.132.0.35",
    p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    g_x: "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    g_y: "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    n: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    h: 1,
};

/// Brainpool P-256r1, RFC 5639 §3.4
pub const BRAINPOOL_P256R1: NamedCurve = NamedCurve {
    name: "brainpoolP256r1",
    oid: "1.3.36.3.3.2.8.1.1.7",
    p: "A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5377",
    a: "7D5A0975FC2C3057EEF67530417AFFE7FB8055C126DC5C6CE94A4B44F330B5D9",
    b: "26DC5C6CE94A4B44F330B5D9BBD77CBF958416295CF7E1CE6BCCDC18FF8C07B6",
    g_x: "8BD2AEB9CB7E57CB2C4B482FFC81B7AFB9DE27E1E3BD23C23A4453BD9ACE3262",
    g_y: "547EF835C3DAC4FD97F8461A14611DC9C27745132DED8E545C1D54C72F046997",
    n: "A9FB57DBA1EEA9BC3E660A909D838D718C397AA3B561A6F7901E0E82974856A7",
    h: 1,
};

/// Brainpool P-384r1, RFC 5639 §3.6
pub const BRAINPOOL_P384R1: NamedCurve = NamedCurve {
    name: "brainpoolP384r1",
    oid: "1.3.36.3.3.2.8.1.1.11",
    p: "8CB91E82A3386D280F5D6F7E50E641DF152F7109ED5456B412B1DA197FB71123ACD3A729901D1A71874700133107EC53",
    a: "7BC382C63D8C150C3C72080ACE05AFA0C2BEA28E4FB22787139165EFBA91F90F8AA5814A503AD4EB04A8C7DD22CE2826",
    b: "04A8C7DD22CE28268B39B55416F0447C2FB77DE107DCD2A62E880EA53EEB62D57CB4390295DBC9943AB78696FA504C11",
    g_x: "1D1C64F068CF45FFA2A63A81B7C13F6B8847A3E77EF14FE3DB7FCAFE0CBD10E8E826E03436D646AAEF87B2E247D4AF1E",
    g_y: "8ABE1D7520F9C2A45CB1EB8E95CFD55262B70B29FEEC5864E19C054FF99129280E4646217791811142820341263C5315",
    n: "8CB91E82A3386D280F5D6F7E50E641DF152F7109ED5456B31F166E6CAC0425A7CF3AB6AF6B7FC3103B883202E9046565",
    h: 1,
};

/// Brainpool P-512r1, RFC 5639 §3.7
pub const BRAINPOOL_P512R1: NamedCurve = NamedCurve {
    name: "brainpoolP512r1",
    oid: "1.3.36.3.3.2.8.1.1.13",
    p: "AADD9DB8DBE9C48B3FD4E6AE33C9FC07CB308DB3B3C9D20ED6639CCA703308717D4D9B009BC66842AECDA12AE6A380E62881FF2F2D82C68528AA6056583A48F3",
    a: "7830A3318B603B89E2327145AC234CC594CBDD8D3DF91610A83441CAEA9863BC2DED5D5AA8253AA10A2EF1C98B9AC8B57F1117A72BF2C7B9E7C1AC4D77FC94CA",
    b: "3DF91610A83441CAEA9863BC2DED5D5AA8253AA10A2EF1C98B9AC8B57F1117A72BF2C7B9E7C1AC4D77FC94CADC083E67984050B75EBAE5DD2809BD638016F723",
    g_x: "81AEE4BDD82ED9645A21322E9C4C6A9385ED9F70B5D916C1B43B62EEF4D0098EFF3B1F78E2D0D48D50D1687B93B97D5F7C6D5047406A5E688B352209BCB9F822",
    g_y: "7DDE385D566332ECC0EABFA9CF7822FDF209F70024A57B1AA000C55B881F8111B2DCDE494A5F485E5BCA4BD88A2763AED1CA2B2FA8F0540678CD1E0F3AD80892",
    n: "AADD9DB8DBE9C48B3FD4E6AE33C9FC07CB308DB3B3C9D20ED6639CCA70330870553E5C414CA92619418661197FAC10471DB1D381085DDADDB58796829CA90069",
    h: 1,
};

/// All named curves known to the library
pub const NAMED_CURVES: &[NamedCurve] = &[
    ANSIX9P192R1,
    ANSIP224R1,
    ANSIX9P256R1,
    ANSIP384R1,
    ANSIP521R1,
    BRAINPOOL_P256R1,
    BRAINPOOL_P384R1,
    BRAINPOOL_P512R1,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_oids_unique() {
        for (i, a) in NAMED_CURVES.iter().enumerate() {
            for b in &NAMED_CURVES[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.oid, b.oid);
                assert_ne!(a.p, b.p, "{} and {} share a prime", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_coordinates_as_wide_as_prime() {
        for curve in NAMED_CURVES {
            assert_eq!(curve.p.len() % 2, 0, "{}", curve.name);
            assert_eq!(curve.g_x.len(), curve.p.len(), "{}", curve.name);
            assert_eq!(curve.g_y.len(), curve.p.len(), "{}", curve.name);
            assert_eq!(curve.h, 1);
        }
    }
}
