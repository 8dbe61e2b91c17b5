mod bound;
pub use bound::BoundConnection;

mod builder;
pub use builder::Builder;

use crate::{
    db::{Pool, PoolConnection},
    driver::{Connection, Response},
    err, Error, Result, Statement,
};

use log::{debug, info, warn};
use std::sync::{Mutex, PoisonError};

/// Creates temporary schemas populated with structural copies of tables from a source schema.
///
/// A factory is meant to be shared (by reference or in an `Arc`) between all tests of a run.
/// Every schema it provisions gets a name of the form `<prefix>_<n>`, where `n` comes from a
/// counter owned by this factory. Names never repeat for the lifetime of the factory.
#[derive(Debug)]
pub struct Factory {
    /// Connections are checked out of this pool.
    pool: Pool,

    /// Schema whose tables act as templates.
    source_schema: String,

    /// Prefix of every generated schema name.
    prefix: String,

    /// Next value to hand out. Only ever incremented.
    counter: Mutex<u64>,
}

impl Factory {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a factory without validating its arguments.
    ///
    /// Prefer [`Factory::builder`], which rejects a source schema that the factory could
    /// generate itself.
    pub fn new(pool: Pool, source_schema: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            source_schema: source_schema.into(),
            prefix: prefix.into(),
            counter: Mutex::new(0),
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn source_schema(&self) -> &str {
        &self.source_schema
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Reserves the next schema name.
    ///
    /// The counter is read, formatted and incremented under one lock acquisition, so concurrent
    /// callers never observe the same value.
    pub fn next_schema_name(&self) -> String {
        // The guarded section cannot panic halfway through, so a poisoned counter is still valid.
        let mut counter = self.counter.lock().unwrap_or_else(PoisonError::into_inner);
        let name = format!("{}_{}", self.prefix, *counter);
        *counter += 1;
        name
    }

    /// Creates a new schema holding empty copies of `tables` and returns a connection bound to
    /// it.
    ///
    /// Tables are created in the given order with `LIKE <source>.<table> INCLUDING ALL`, so
    /// columns, defaults, constraints and indexes are copied but rows are not. Table names are
    /// not checked up front; a missing table surfaces as a failure of its `CREATE TABLE`.
    ///
    /// On failure the connection is closed. If the schema was already created it is left in
    /// the database, together with any tables created before the failing one.
    pub async fn provision<I, S>(&self, tables: I) -> Result<BoundConnection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut connection = self
            .pool
            .get()
            .await
            .map_err(|e| e.context(err!("failed to acquire a connection")))?;

        let schema = self.next_schema_name();

        match self.populate(&mut connection, &schema, tables).await {
            Ok(count) => {
                info!("provisioned schema `{schema}` with {count} table(s)");
                Ok(BoundConnection::new(connection, schema))
            }
            Err(e) => {
                connection.detach();
                Err(e)
            }
        }
    }

    async fn populate<I, S>(
        &self,
        connection: &mut PoolConnection,
        schema: &str,
        tables: I,
    ) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        exec(connection, Statement::create_schema(schema))
            .await
            .map_err(|e| e.context(err!("failed to create schema `{schema}`")))?;

        exec(connection, Statement::set_schema(schema))
            .await
            .map_err(|e| {
                warn!("schema `{schema}` leaked: could not make it the current schema");
                e.context(err!("failed to set current schema to `{schema}`"))
            })?;

        let mut count = 0;

        for table in tables {
            let table = table.as_ref();
            let stmt = Statement::create_table_like(schema, table, &self.source_schema);

            exec(connection, stmt).await.map_err(|e| {
                warn!("schema `{schema}` leaked with {count} table(s) after `{table}` failed");
                e.context(err!(
                    "failed to create table `{table}` like `{}.{table}` in schema `{schema}`",
                    self.source_schema
                ))
            })?;

            count += 1;
        }

        Ok(count)
    }

    /// Drops the schema a connection was bound to and returns the connection.
    ///
    /// The connection's live current schema is queried first. Nothing is dropped when it is
    /// the source schema, when the recorded schema is the source schema, or when the live and
    /// recorded names disagree.
    ///
    /// The connection is always given back: to the pool when the drop succeeds, closed
    /// otherwise. Errors are returned either way.
    pub async fn release(&self, bound: BoundConnection) -> Result<()> {
        let (mut connection, schema) = bound.into_parts();

        match self.drop_schema(&mut connection, &schema).await {
            Ok(()) => {
                info!("dropped schema `{schema}`");
                Ok(())
            }
            Err(e) => {
                connection.detach();
                Err(e.context(err!("failed to release schema `{schema}`")))
            }
        }
    }

    async fn drop_schema(&self, connection: &mut PoolConnection, recorded: &str) -> Result<()> {
        let current = exec(connection, Statement::current_schema())
            .await
            .and_then(Response::into_value)
            .map_err(|e| e.context(err!("failed to query the current schema")))?;

        let Some(current) = current else {
            return Err(Error::invalid_result("session has no current schema"));
        };

        if current == self.source_schema || recorded == self.source_schema {
            warn!(
                "refusing to drop source schema `{}`; current=`{current}` recorded=`{recorded}`",
                self.source_schema
            );
            return Err(Error::source_schema_guard(&self.source_schema));
        }

        if current != recorded {
            return Err(Error::schema_mismatch(recorded, current));
        }

        exec(connection, Statement::drop_schema_cascade(&current))
            .await
            .map_err(|e| e.context(err!("failed to drop schema `{current}`")))?;

        Ok(())
    }
}

async fn exec(connection: &mut PoolConnection, stmt: Statement) -> Result<Response> {
    debug!("exec {stmt:?}");
    connection.exec(&stmt).await
}
