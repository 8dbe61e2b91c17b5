use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// A single-row, single-column string result. `None` represents SQL `NULL`.
    Value(Option<String>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn value(value: Option<String>) -> Self {
        Self {
            rows: Rows::Value(value),
        }
    }

    /// Returns the single value, failing if the response is a row count.
    pub fn into_value(self) -> Result<Option<String>> {
        match self.rows {
            Rows::Value(value) => Ok(value),
            Rows::Count(count) => Err(Error::invalid_result(format!(
                "expected a single value, got a row count of {count}"
            ))),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}
