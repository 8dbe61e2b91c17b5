//! Provision isolated, uniquely named PostgreSQL schemas for tests.
//!
//! A [`Factory`] copies the structure of named tables from a *source* schema into a fresh schema
//! and hands back a connection bound to it. Releasing the connection drops the schema again,
//! unless the connection points at the source schema.
//!
//! ```no_run
//! # async fn run() -> schemata::Result<()> {
//! let factory = schemata::Factory::builder()
//!     .source_schema("app")
//!     .prefix("fixture")
//!     .connect("postgresql://localhost:5432/app_test")?;
//!
//! let conn = factory.provision(["users", "posts"]).await?;
//! assert_eq!(conn.schema(), "fixture_0");
//!
//! factory.release(conn).await?;
//! # Ok(())
//! # }
//! ```

pub mod db;

pub mod driver;

pub mod factory;
pub use factory::{BoundConnection, Factory};

pub use schemata_core::{bail, err, Error, Result, Statement};
