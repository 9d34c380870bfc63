use super::*;
use eccard_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    // Parameter error keeps its reason as the stable message
    let err = Error::param("multiply", "factor k not in range [1, n]");
    let core_err = CoreError::from(err);
    match &core_err {
        CoreError::InvalidArgument { context, message } => {
            assert_eq!(*context, "multiply");
            assert_eq!(message, "factor k not in range [1, n]");
        }
        _ => panic!("Expected InvalidArgument error"),
    }

    // Length error
    let err = Error::Length {
        context: "CBC plaintext",
        expected: 32,
        actual: 17,
    };
    let core_err = CoreError::from(err);
    assert_eq!(core_err.context(), "CBC plaintext");
    assert_eq!(core_err.message(), "invalid length: expected 32, got 17");

    // Missing elements stay distinguishable
    let core_err = CoreError::from(Error::missing("domain parameters", "object identifier"));
    assert!(matches!(core_err, CoreError::NoSuchElement { .. }));

    // Arithmetic failures are never wrapped as InvalidArgument
    let core_err = CoreError::from(Error::Arithmetic {
        operation: "modular inverse",
        details: "BigInteger not invertible",
    });
    assert!(matches!(core_err, CoreError::Arithmetic { .. }));
    assert_eq!(core_err.message(), "BigInteger not invertible");
}

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "x", "never").is_ok());
    let err = validate::parameter(false, "x", "bad x").unwrap_err();
    assert_eq!(err.message(), "bad x");

    assert!(validate::length("iv", 16, 16).is_ok());
    assert!(validate::length("iv", 15, 16).is_err());

    assert!(validate::block_multiple("data", 32, 16).is_ok());
    match validate::block_multiple("data", 33, 16) {
        Err(Error::Length { expected, .. }) => assert_eq!(expected, 48),
        other => panic!("unexpected {:?}", other),
    }
}
