use super::Error;

/// Error when a release would drop the source schema.
///
/// The connection's current schema (or the schema recorded for it at provision time) is the
/// schema the factory copies tables from. Dropping it would destroy the templates, so the
/// release is aborted before any `DROP SCHEMA` is sent. This always indicates a bug in the
/// caller or a connection that was never bound, never a transient database failure.
#[derive(Debug)]
pub(super) struct SourceSchemaGuardError {
    schema: Box<str>,
}

impl std::error::Error for SourceSchemaGuardError {}

impl core::fmt::Display for SourceSchemaGuardError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "refusing to drop schema: current schema `{}` is the source schema",
            self.schema
        )
    }
}

impl Error {
    /// Creates a source schema guard error for `schema`.
    pub fn source_schema_guard(schema: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SourceSchemaGuard(SourceSchemaGuardError {
            schema: schema.into().into(),
        }))
    }

    /// Returns `true` if the release was refused because it targeted the source schema.
    pub fn is_source_schema_guard(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::SourceSchemaGuard(_)))
    }
}
