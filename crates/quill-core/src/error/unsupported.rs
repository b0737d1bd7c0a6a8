use super::Error;

/// Error when the compiler or a serializer encounters a construct it has no
/// mapping for. Raised instead of guessing at semantics.
#[derive(Debug)]
pub(super) struct UnsupportedError {
    pub(super) message: String,
}

impl std::error::Error for UnsupportedError {}

impl core::fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported construct: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported-construct error.
    pub fn unsupported(message: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::Unsupported(UnsupportedError {
            message: message.to_string(),
        }))
    }

    /// Returns `true` if this error is an unsupported-construct error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unsupported(_))
    }
}
