use super::Error;

/// Error for statement shapes that must never reach a database.
///
/// The one shape in this family is an UPDATE or DELETE with no condition:
/// treated as a programming-contract violation rather than a valid
/// "mutate everything" request.
#[derive(Debug)]
pub(super) struct UnsafeStatementError {
    pub(super) message: String,
}

impl std::error::Error for UnsafeStatementError {}

impl core::fmt::Display for UnsafeStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsafe statement: {}", self.message)
    }
}

impl Error {
    /// Creates an unsafe-statement error.
    pub fn unsafe_statement(message: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::UnsafeStatement(UnsafeStatementError {
            message: message.to_string(),
        }))
    }

    /// Returns `true` if this error is an unsafe-statement error.
    pub fn is_unsafe_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsafeStatement(_))
    }
}
