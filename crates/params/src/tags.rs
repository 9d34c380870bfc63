//! Tag values of the BER-TLV card templates and the envelope

/// ASN.1 OBJECT IDENTIFIER
pub const OBJECT_IDENTIFIER: u32 = 0x06;

/// Card public key template
pub const PUBLIC_KEY_TEMPLATE: u32 = 0x7F49;
/// Card private key template
pub const PRIVATE_KEY_TEMPLATE: u32 = 0x7F48;
/// EC public point inside a key template
pub const PUBLIC_POINT: u32 = 0x86;
/// EC private scalar inside a key template
pub const PRIVATE_SCALAR: u32 = 0x92;

/// Outer tag of the hybrid envelope
pub const ENVELOPE: u32 = 0xA6;
/// Padding-indicator-prefixed ciphertext inside the envelope
pub const CIPHERTEXT: u32 = 0x86;
/// Truncated MAC inside the envelope
pub const MAC: u32 = 0x8E;

/// Object identifiers used by the key containers
pub mod oid {
    /// id-ecPublicKey (RFC 5480)
    pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
    /// prime-field (X9.62 FieldID)
    pub const PRIME_FIELD: &str = "1.2.840.10045.1.1";
}
