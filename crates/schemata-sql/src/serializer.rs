#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Period;

mod ident;
use ident::{Ident, Literal};

mod statement;

use crate::Statement;

/// Serialize a statement to a PostgreSQL string.
///
/// Identifiers are always double-quoted so that generated schema names keep their exact case
/// and `CURRENT_SCHEMA()` reports them back byte-for-byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
