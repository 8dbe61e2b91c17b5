use super::{Formatter, Ident, Literal, Period, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateSchema(stmt) => stmt.to_sql(f),
            Statement::SetSchema(stmt) => stmt.to_sql(f),
            Statement::CreateTableLike(stmt) => stmt.to_sql(f),
            Statement::CurrentSchema(stmt) => stmt.to_sql(f),
            Statement::DropSchema(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateSchema {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE SCHEMA " Ident(&self.name));
    }
}

impl ToSql for &stmt::SetSchema {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SET SCHEMA " Literal(&self.name));
    }
}

impl ToSql for &stmt::CreateTableLike {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Period([Ident(&self.schema), Ident(&self.table)]);
        let source = Period([Ident(&self.source_schema), Ident(&self.source_table)]);

        fmt!(f, "CREATE TABLE " table " (LIKE " source " INCLUDING ALL)");
    }
}

impl ToSql for &stmt::CurrentSchema {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT CURRENT_SCHEMA()");
    }
}

impl ToSql for &stmt::DropSchema {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let cascade = if self.cascade { " CASCADE" } else { "" };

        fmt!(f, "DROP SCHEMA " Ident(&self.name) cascade);
    }
}
