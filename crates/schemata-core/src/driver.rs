mod response;
pub use response::{Response, Rows};

use crate::{async_trait, stmt::Statement};

use std::fmt::Debug;

/// Opens connections to a database.
///
/// A driver is shared by the connection pool and must be usable from many tasks at once.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on the number of simultaneously open connections, if the driver has one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single database session.
///
/// Session state, most importantly the current schema, lives on the connection. Statements
/// executed on the same connection observe each other's effects.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a statement.
    ///
    /// DDL statements respond with a row count. [`Statement::CurrentSchema`] responds with a
    /// single value.
    async fn exec(&mut self, stmt: &Statement) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    async fn connect(&self) -> crate::Result<Box<dyn Connection>> {
        (**self).connect().await
    }

    fn max_connections(&self) -> Option<usize> {
        (**self).max_connections()
    }
}
