use crate::Result;

use schemata_core::{
    async_trait,
    driver::{Connection, Driver},
};

use anyhow::Context as _;
use url::Url;

/// A driver chosen from a connection URL's scheme.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid connection URL; url={url}"))?;

        let driver = match url.scheme() {
            "postgresql" | "postgres" => connect_postgresql(&url)?,
            scheme => {
                crate::bail!("unsupported database; scheme={scheme}; url={url}")
            }
        };

        Ok(Self { url, driver })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    fn max_connections(&self) -> Option<usize> {
        self.driver.max_connections()
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &Url) -> Result<Box<dyn Driver>> {
    let driver = schemata_driver_postgresql::PostgreSQL::new(url.as_str())?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &Url) -> Result<Box<dyn Driver>> {
    crate::bail!("`postgresql` feature not enabled")
}
