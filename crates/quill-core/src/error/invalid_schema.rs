use super::Error;

/// Error for a desired schema that is inconsistent with itself, e.g. a
/// seed row whose arity does not match its table's column list.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    pub(super) message: String,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid-schema error.
    pub fn invalid_schema(message: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.to_string(),
        }))
    }

    /// Returns `true` if this error is an invalid-schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
