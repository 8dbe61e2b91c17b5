use super::Statement;

/// Sets the session's default schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSchema {
    pub name: String,
}

impl Statement {
    pub fn set_schema(name: impl Into<String>) -> Self {
        SetSchema { name: name.into() }.into()
    }
}

impl From<SetSchema> for Statement {
    fn from(value: SetSchema) -> Self {
        Self::SetSchema(value)
    }
}
