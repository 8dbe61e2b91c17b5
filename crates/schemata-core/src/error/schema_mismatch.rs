use super::Error;

/// Error when a bound connection's live schema differs from the one recorded at provision time.
#[derive(Debug)]
pub(super) struct SchemaMismatchError {
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for SchemaMismatchError {}

impl core::fmt::Display for SchemaMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "schema mismatch: connection was provisioned for `{}` but its current schema is `{}`",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a schema mismatch error.
    pub fn schema_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatchError {
            expected: expected.into().into(),
            actual: actual.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema mismatch error.
    pub fn is_schema_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::SchemaMismatch(_)))
    }
}
