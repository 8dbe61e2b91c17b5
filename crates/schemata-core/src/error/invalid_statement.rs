use super::Error;

/// Error when a statement cannot be sent to the database.
///
/// This occurs when:
/// - An identifier is empty
/// - An identifier exceeds the driver's maximum identifier length
///
/// These errors are raised by the driver before any SQL reaches the server.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidStatement(_)))
    }
}
