use super::Error;

/// Error when a catalog-reported native type cannot be mapped back to a
/// value type. Fatal: continuing would silently mis-type a column.
#[derive(Debug)]
pub(super) struct TypeMappingError {
    pub(super) message: String,
}

impl std::error::Error for TypeMappingError {}

impl core::fmt::Display for TypeMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type mapping failed: {}", self.message)
    }
}

impl Error {
    /// Creates a type-mapping error.
    pub fn type_mapping(message: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::TypeMapping(TypeMappingError {
            message: message.to_string(),
        }))
    }

    /// Returns `true` if this error is a type-mapping error.
    pub fn is_type_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMapping(_))
    }
}
