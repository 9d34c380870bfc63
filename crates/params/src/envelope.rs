//! Constants for the ECIES-style hybrid envelope

/// Padding indicator prefixed to the ciphertext ("ISO padding applied")
pub const PADDING_INDICATOR: u8 = 0x01;

/// Length of the truncated CMAC in bytes
pub const MAC_SIZE: usize = 8;

/// KDF counter for the encryption subkey
pub const KDF_COUNTER_ENC: u32 = 1;

/// KDF counter for the MAC subkey
pub const KDF_COUNTER_MAC: u32 = 2;

/// Size of each derived subkey in bytes (SHA-256 output, used as an AES-256 key)
pub const SUBKEY_SIZE: usize = 32;

/// ISO/IEC 7816-4 padding marker
pub const ISO_PADDING_MARKER: u8 = 0x80;
