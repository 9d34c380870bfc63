//! Published test vectors used across suites

/// RFC 6979 A.2.5 private key on P-256
pub const P256_D: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";

/// Uncompressed public point for [`P256_D`]
pub const P256_Q: &str = "0460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                          7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

/// RFC 6979 A.2.5, SHA-256, message "sample"
pub mod sample {
    /// Nonce
    pub const K: &str = "a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60";
    /// r component
    pub const R: &str = "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716";
    /// s component
    pub const S: &str = "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";
}

/// [`P256_D`] as PKCS #8, produced by OpenSSL
pub const P256_PKCS8: &str = "308187020100301306072a8648ce3d020106082a8648ce3d030107046d306b0201010420\
                              c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721a1440342\
                              000460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb67903\
                              fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

/// [`P256_Q`] as SubjectPublicKeyInfo, produced by OpenSSL
pub const P256_SPKI: &str = "3059301306072a8648ce3d020106082a8648ce3d0301070342000460fed4ba255a9d31c9\
                             61eb74c6356d68c049b8923b61fa6ce669622e60f29fb67903fe1008b8bc99a41ae9e956\
                             28bc64f2f1b20c2d7e9f5177a3c294d4462299";

/// Compressed encoding of the P-256 generator
pub const P256_G_COMPRESSED: &str =
    "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// Affine coordinates of the P-256 generator
pub const P256_G: (&str, &str) = (
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
);
