//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the lengths
/// are compared in variable time; lengths are public in every caller.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// XOR `src` into `dst` byte by byte
///
/// Both slices must have the same length; excess bytes of the longer one are ignored.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
        assert!(ct_eq([0u8; 0], [0u8; 0]));
    }

    #[test]
    fn test_xor_in_place() {
        let mut block = [0x0fu8, 0xf0, 0xaa];
        xor_in_place(&mut block, &[0xff, 0xff, 0xaa]);
        assert_eq!(block, [0xf0, 0x0f, 0x00]);
    }
}
