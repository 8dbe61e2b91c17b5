use super::Statement;

/// Creates a structural clone of a table in another schema.
///
/// The new table gets the source table's columns, types, defaults, constraints and indexes, but
/// none of its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableLike {
    /// Schema the new table is created in.
    pub schema: String,

    /// Name of the new table.
    pub table: String,

    /// Schema holding the template table.
    pub source_schema: String,

    /// Name of the template table.
    pub source_table: String,
}

impl Statement {
    /// Clones `source_schema.table` into `schema.table`, keeping the table name.
    pub fn create_table_like(
        schema: impl Into<String>,
        table: impl Into<String>,
        source_schema: impl Into<String>,
    ) -> Self {
        let table = table.into();

        CreateTableLike {
            schema: schema.into(),
            source_table: table.clone(),
            table,
            source_schema: source_schema.into(),
        }
        .into()
    }
}

impl From<CreateTableLike> for Statement {
    fn from(value: CreateTableLike) -> Self {
        Self::CreateTableLike(value)
    }
}
