//! Error type definitions for elliptic-curve operations

use std::borrow::Cow;

/// Primary error type for eccard operations
///
/// Every variant carries the name of the failing operation (`context`) and,
/// where applicable, a stable message. Callers and tests key on the message
/// text, so the messages produced by the library never change between releases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value is outside its legal range, malformed, or cryptographically invalid
    #[error("{context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// A required element is absent (e.g. a curve without object identifier)
    #[error("{context}: no such element: {message}")]
    NoSuchElement {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Modular arithmetic failed, e.g. inverting a non-invertible value
    #[error("{context}: arithmetic error: {message}")]
    Arithmetic {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Signature verification failed
    #[error("{context}: invalid signature")]
    InvalidSignature { context: &'static str },
}

/// Result type for eccard operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`]
    pub fn invalid_argument(context: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::NoSuchElement`]
    pub fn no_such_element(context: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::NoSuchElement {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Arithmetic`]
    pub fn arithmetic(context: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Arithmetic {
            context,
            message: message.into(),
        }
    }

    /// The single, uninformative error every envelope decipher failure maps to
    pub fn decipher() -> Self {
        Self::invalid_argument("envelope decipher", "decipher error")
    }

    /// The operation that produced this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidArgument { context, .. }
            | Self::NoSuchElement { context, .. }
            | Self::Arithmetic { context, .. }
            | Self::InvalidSignature { context } => context,
        }
    }

    /// The stable message text of this error
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. }
            | Self::NoSuchElement { message, .. }
            | Self::Arithmetic { message, .. } => message,
            Self::InvalidSignature { .. } => "invalid signature",
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::NoSuchElement { message, .. } => Self::NoSuchElement { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
        }
    }
}
