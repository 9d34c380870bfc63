//! ISO/IEC 7816-4 padding: a single 0x80 marker followed by zeros

use eccard_params::envelope::ISO_PADDING_MARKER;

use crate::error::{Error, Result};

/// Append 0x80 and zero-fill to the next multiple of `block_size`
///
/// A full padding block is added when the input is already aligned.
pub fn iso_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let padded_len = (data.len() / block_size + 1) * block_size;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(data);
    out.push(ISO_PADDING_MARKER);
    out.resize(padded_len, 0x00);
    out
}

/// Strip ISO padding by scanning backward for the 0x80 marker
pub fn iso_unpad(data: &[u8]) -> Result<&[u8]> {
    let marker = data
        .iter()
        .rposition(|&b| b != 0x00)
        .ok_or_else(|| Error::param("ISO padding", "padding marker not found"))?;
    if data[marker] != ISO_PADDING_MARKER {
        return Err(Error::param("ISO padding", "padding marker not found"));
    }
    Ok(&data[..marker])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pad_lengths() {
        assert_eq!(iso_pad(&[], 16), {
            let mut v = vec![0u8; 16];
            v[0] = 0x80;
            v
        });
        assert_eq!(iso_pad(&[1; 15], 16).len(), 16);
        assert_eq!(iso_pad(&[1; 16], 16).len(), 32);
        assert_eq!(iso_pad(&[1; 16], 16)[16], 0x80);
    }

    #[test]
    fn test_unpad_keeps_trailing_marker_bytes_of_payload() {
        let payload = [0x80, 0x00, 0x80];
        let padded = iso_pad(&payload, 16);
        assert_eq!(iso_unpad(&padded).unwrap(), &payload);
    }

    #[test]
    fn test_unpad_rejects_missing_marker() {
        assert!(iso_unpad(&[]).is_err());
        assert!(iso_unpad(&[0u8; 16]).is_err());
        assert!(iso_unpad(&[1, 2, 3, 0, 0]).is_err());
    }

    proptest! {
        #[test]
        fn prop_pad_unpad(data in proptest::collection::vec(any::<u8>(), 0..100)) {
            let padded = iso_pad(&data, 16);
            prop_assert_eq!(padded.len() % 16, 0);
            prop_assert!(padded.len() > data.len());
            prop_assert_eq!(iso_unpad(&padded).unwrap(), &data[..]);
        }
    }
}
