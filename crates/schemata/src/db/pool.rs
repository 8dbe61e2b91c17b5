//! Connection pooling for database connections.

use std::ops::{Deref, DerefMut};

pub use deadpool::managed::{Status, Timeouts};
use schemata_core::driver::{Connection, Driver};

use crate::db::Connect;

/// Get the default maximum size of a pool, which is `cpu_core_count * 4`
/// including logical cores (Hyper-Threading).
fn get_default_pool_max_size() -> usize {
    deadpool::managed::PoolConfig::default().max_size
}

/// Configuration for connection pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_size: usize,
    pub timeouts: Timeouts,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: get_default_pool_max_size(),
            timeouts: Default::default(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A connection pool that manages database connections.
///
/// Cloning a pool is cheap; clones share the same set of connections.
#[derive(Debug, Clone)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

impl Pool {
    /// Creates a new connection pool from the given driver with default settings.
    ///
    /// No connection is opened until the first [`Pool::get`].
    pub fn new(driver: impl Driver) -> crate::Result<Self> {
        Self::with_config(driver, PoolConfig::default())
    }

    /// Creates a new connection pool from the given driver.
    ///
    /// The driver's [`Driver::max_connections`] caps `config.max_size`.
    pub fn with_config(driver: impl Driver, config: PoolConfig) -> crate::Result<Self> {
        let max_size = match driver.max_connections() {
            Some(max_connections) => config.max_size.min(max_connections),
            None => config.max_size,
        };

        let inner = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1)
        .max_size(max_size)
        .timeouts(config.timeouts)
        .build()
        .map_err(crate::Error::connection_pool)?;

        Ok(Self { inner })
    }

    /// Creates a new connection pool from a connection URL.
    pub fn connect(url: &str) -> crate::Result<Self> {
        Self::new(Connect::new(url)?)
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self
            .inner
            .get()
            .await
            .map_err(crate::Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    /// Current size and availability of the pool.
    pub fn status(&self) -> Status {
        self.inner.status()
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = crate::Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
#[derive(Debug)]
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl PoolConnection {
    /// Removes the connection from the pool and closes it.
    ///
    /// Used when the session state can no longer be trusted, so that a later checkout never
    /// inherits it. The pool slot is freed either way.
    pub fn detach(self) {
        drop(deadpool::managed::Object::take(self.inner));
    }
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
