use super::Statement;

/// A statement to drop a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSchema {
    /// Name of the schema.
    pub name: String,

    /// Whether or not to add a `CASCADE` clause, dropping every object in the schema.
    pub cascade: bool,
}

impl Statement {
    /// Drops a schema together with all tables, indexes, constraints and data inside it.
    pub fn drop_schema_cascade(name: impl Into<String>) -> Self {
        DropSchema {
            name: name.into(),
            cascade: true,
        }
        .into()
    }
}

impl From<DropSchema> for Statement {
    fn from(value: DropSchema) -> Self {
        Self::DropSchema(value)
    }
}
