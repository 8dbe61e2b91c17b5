mod create_schema;
pub use create_schema::CreateSchema;

mod create_table_like;
pub use create_table_like::CreateTableLike;

mod current_schema;
pub use current_schema::CurrentSchema;

mod drop_schema;
pub use drop_schema::DropSchema;

mod set_schema;
pub use set_schema::SetSchema;

/// A schema-lifecycle statement understood by every driver.
///
/// Drivers translate these into their own dialect. Only the operations needed to provision and
/// tear down a test schema are represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateSchema(CreateSchema),
    SetSchema(SetSchema),
    CreateTableLike(CreateTableLike),
    CurrentSchema(CurrentSchema),
    DropSchema(DropSchema),
}

impl Statement {
    /// Returns `true` if executing the statement yields a value rather than a row count.
    pub fn returns_value(&self) -> bool {
        matches!(self, Statement::CurrentSchema(_))
    }

    /// Every identifier referenced by the statement, in order of appearance.
    pub fn idents(&self) -> Vec<&str> {
        match self {
            Statement::CreateSchema(stmt) => vec![&stmt.name[..]],
            Statement::SetSchema(stmt) => vec![&stmt.name[..]],
            Statement::CreateTableLike(stmt) => vec![
                &stmt.schema[..],
                &stmt.table[..],
                &stmt.source_schema[..],
                &stmt.source_table[..],
            ],
            Statement::CurrentSchema(_) => vec![],
            Statement::DropSchema(stmt) => vec![&stmt.name[..]],
        }
    }

    pub fn is_create_schema(&self) -> bool {
        matches!(self, Statement::CreateSchema(_))
    }

    pub fn is_set_schema(&self) -> bool {
        matches!(self, Statement::SetSchema(_))
    }

    pub fn is_create_table_like(&self) -> bool {
        matches!(self, Statement::CreateTableLike(_))
    }

    pub fn is_current_schema(&self) -> bool {
        matches!(self, Statement::CurrentSchema(_))
    }

    pub fn is_drop_schema(&self) -> bool {
        matches!(self, Statement::DropSchema(_))
    }
}
