mod driver;
mod invalid_schema;
mod type_mapping;
mod unsafe_statement;
mod unsupported;

use driver::DriverError;
use invalid_schema::InvalidSchemaError;
use type_mapping::TypeMappingError;
use unsafe_statement::UnsafeStatementError;
use unsupported::UnsupportedError;

use std::sync::Arc;

/// An error that can occur in Quill.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// The compiler or a serializer hit a construct it has no mapping for.
    Unsupported(UnsupportedError),
    /// A statement shape that must never reach a database, e.g. an
    /// unconditional UPDATE or DELETE.
    UnsafeStatement(UnsafeStatementError),
    /// A catalog-reported native type has no corresponding value type.
    TypeMapping(TypeMappingError),
    /// The desired schema is inconsistent with itself.
    InvalidSchema(InvalidSchemaError),
    /// The underlying database rejected a statement. Propagated untouched,
    /// never retried here.
    Driver(DriverError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self.kind() {
            Unsupported(err) => core::fmt::Display::fmt(err, f),
            UnsafeStatement(err) => core::fmt::Display::fmt(err, f),
            TypeMapping(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Driver(DriverError { inner: err.into() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn unsupported_display() {
        let err = Error::unsupported("cross apply is not available on this dialect");
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "unsupported construct: cross apply is not available on this dialect"
        );
    }

    #[test]
    fn unsafe_statement_display() {
        let err = Error::unsafe_statement("DELETE without a condition");
        assert!(err.is_unsafe_statement());
        assert_eq!(
            err.to_string(),
            "unsafe statement: DELETE without a condition"
        );
    }

    #[test]
    fn type_mapping_display() {
        let err = Error::type_mapping("no value type for native type `money`");
        assert!(err.is_type_mapping());
        assert_eq!(
            err.to_string(),
            "type mapping failed: no value type for native type `money`"
        );
    }

    #[test]
    fn invalid_schema_display() {
        let err = Error::invalid_schema("seed row 0 for table `tags` carries 1 values");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: seed row 0 for table `tags` carries 1 values"
        );
    }

    #[test]
    fn driver_wraps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::driver(io_err);
        assert!(err.is_driver());
        assert!(err.to_string().contains("file not found"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("statement rejected").into();
        assert!(err.is_driver());
        assert_eq!(err.to_string(), "statement rejected");
    }

    #[test]
    fn clone_is_cheap_and_equal_display() {
        let err = Error::unsupported("no mapping for method `pad_left`");
        let clone = err.clone();
        assert_eq!(err.to_string(), clone.to_string());
    }
}
