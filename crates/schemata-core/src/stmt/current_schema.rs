use super::Statement;

/// Queries the session's active schema. Yields a single, possibly `NULL`, string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSchema;

impl Statement {
    pub fn current_schema() -> Self {
        CurrentSchema.into()
    }
}

impl From<CurrentSchema> for Statement {
    fn from(value: CurrentSchema) -> Self {
        Self::CurrentSchema(value)
    }
}
