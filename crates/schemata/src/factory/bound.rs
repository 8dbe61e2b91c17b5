use crate::{
    db::PoolConnection,
    driver::{Connection, Response},
    err, Result, Statement,
};

use std::ops::{Deref, DerefMut};

/// A pooled connection whose current schema was set to a freshly provisioned schema.
///
/// Hand it back with [`Factory::release`](crate::Factory::release) to drop the schema. Dropping
/// a `BoundConnection` without releasing it returns the connection to the pool but leaves the
/// schema in the database.
#[derive(Debug)]
pub struct BoundConnection {
    connection: PoolConnection,

    /// Name the factory generated for this connection. Checked against the live session at
    /// release time.
    schema: String,
}

impl BoundConnection {
    pub(crate) fn new(connection: PoolConnection, schema: String) -> Self {
        Self { connection, schema }
    }

    /// Name of the schema provisioned for this connection.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Executes a statement in the bound session.
    pub async fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        self.connection.exec(stmt).await
    }

    /// Asks the database for the session's current schema.
    ///
    /// Returns `None` when no schema on the search path exists, for example after the
    /// provisioned schema was dropped behind the factory's back.
    pub async fn current_schema(&mut self) -> Result<Option<String>> {
        self.exec(&Statement::current_schema())
            .await
            .and_then(Response::into_value)
            .map_err(|e| e.context(err!("failed to query the current schema")))
    }

    pub(crate) fn into_parts(self) -> (PoolConnection, String) {
        (self.connection, self.schema)
    }
}

impl Deref for BoundConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for BoundConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}
