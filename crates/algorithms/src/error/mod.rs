//! Error handling for elliptic-curve and symmetric primitives

use std::borrow::Cow;
use std::fmt;

use eccard_api::Error as CoreError;

/// The error type for primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the operation or parameter that rejected the input
        name: &'static str,
        /// Stable reason text
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed TLV, DER or object identifier
    Encoding {
        /// Structure being decoded
        context: &'static str,
        /// What was wrong with it
        reason: Cow<'static, str>,
    },

    /// A required sub-element or attribute is missing
    NoSuchElement {
        /// Structure being inspected
        context: &'static str,
        /// Description of the missing element
        element: Cow<'static, str>,
    },

    /// Modular arithmetic failure, e.g. a non-invertible value
    Arithmetic {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Encoding {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a NoSuchElement error
    pub fn missing<R: Into<Cow<'static, str>>>(context: &'static str, element: R) -> Self {
        Error::NoSuchElement {
            context,
            element: element.into(),
        }
    }

    /// The stable message carried over to [`CoreError::message`]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Error::Parameter { reason, .. } | Error::Encoding { reason, .. } => {
                Cow::Borrowed(reason.as_ref())
            }
            Error::NoSuchElement { element, .. } => Cow::Borrowed(element.as_ref()),
            Error::Length {
                expected, actual, ..
            } => Cow::Owned(format!("invalid length: expected {}, got {}", expected, actual)),
            Error::Arithmetic { details, .. } => Cow::Borrowed(details),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, reason } => {
                write!(f, "Malformed {}: {}", context, reason)
            }
            Error::NoSuchElement { context, element } => {
                write!(f, "Element not found in {}: {}", context, element)
            }
            Error::Arithmetic { operation, details } => {
                write!(f, "Arithmetic error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::encoding("DER", err.to_string())
    }
}

impl From<der::oid::Error> for Error {
    fn from(err: der::oid::Error) -> Self {
        Error::encoding("object identifier", err.to_string())
    }
}

// Implement conversion to CoreError; messages are carried over verbatim
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidArgument {
                context: name,
                message: reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidArgument {
                context,
                message: Cow::Owned(format!(
                    "invalid length: expected {}, got {}",
                    expected, actual
                )),
            },
            Error::Encoding { context, reason } => CoreError::InvalidArgument {
                context,
                message: reason,
            },
            Error::NoSuchElement { context, element } => CoreError::NoSuchElement {
                context,
                message: element,
            },
            Error::Arithmetic { operation, details } => CoreError::Arithmetic {
                context: operation,
                message: Cow::Borrowed(details),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
