//! Error handling for the eccard ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_preserved_across_context_change() {
        let err = Error::invalid_argument("multiply", "factor k not in range [1, n]")
            .with_context("ECDSA sign");
        assert_eq!(err.context(), "ECDSA sign");
        assert_eq!(err.message(), "factor k not in range [1, n]");
    }

    #[test]
    fn test_display() {
        let err = Error::no_such_element("card container", "curve has no object identifier");
        assert_eq!(
            err.to_string(),
            "card container: no such element: curve has no object identifier"
        );
        assert_eq!(Error::decipher().to_string(), "envelope decipher: decipher error");
    }

    #[test]
    fn test_wrap_err_discards_cause() {
        let res: core::result::Result<(), Error> =
            Err(Error::invalid_argument("MAC", "tag mismatch"));
        let wrapped = res.wrap_err(Error::decipher);
        assert_eq!(wrapped.unwrap_err().message(), "decipher error");
    }
}
