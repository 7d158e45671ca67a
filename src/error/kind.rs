//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// | ErrorKind         | Raised by                                   |
/// |-------------------|---------------------------------------------|
/// | `InvalidArgument` | Observer registry (empty observer id)       |
/// | `Serialization`   | Notification encoding/decoding              |
/// | `Internal`        | Unexpected internal state                   |
/// | `Unknown`         | Catch-all                                   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument was rejected before the call could proceed.
    #[error("invalid argument")]
    InvalidArgument,

    /// A notification message could not be encoded or decoded.
    #[error("serialization error")]
    Serialization,

    /// Internal error.
    #[error("internal error")]
    Internal,

    /// Unknown or unexpected error.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` if the error was caused by the caller's input.
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ErrorKind::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_caller_error() {
        assert!(ErrorKind::InvalidArgument.is_caller_error());
        assert!(!ErrorKind::Serialization.is_caller_error());
        assert!(!ErrorKind::Internal.is_caller_error());
        assert!(!ErrorKind::Unknown.is_caller_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::InvalidArgument.to_string(), "invalid argument");
        assert_eq!(ErrorKind::Serialization.to_string(), "serialization error");
    }
}
