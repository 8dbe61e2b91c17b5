use super::Statement;

/// `CREATE SCHEMA <name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchema {
    /// Name of the schema to create.
    pub name: String,
}

impl Statement {
    /// Creates a new, empty schema.
    pub fn create_schema(name: impl Into<String>) -> Self {
        CreateSchema { name: name.into() }.into()
    }
}

impl From<CreateSchema> for Statement {
    fn from(value: CreateSchema) -> Self {
        Self::CreateSchema(value)
    }
}
