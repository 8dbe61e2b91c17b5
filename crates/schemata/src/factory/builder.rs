use super::Factory;
use crate::{
    bail,
    db::{Connect, Pool, PoolConfig},
    Result,
};

/// Configures and creates a [`Factory`].
#[derive(Debug, Clone)]
pub struct Builder {
    /// Schema whose tables are copied. Defaults to `public`.
    source_schema: String,

    /// Prefix of generated schema names. Defaults to `test`.
    prefix: String,

    /// Only used by [`Builder::connect`].
    pool_config: PoolConfig,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            source_schema: "public".to_string(),
            prefix: "test".to_string(),
            pool_config: PoolConfig::default(),
        }
    }
}

impl Builder {
    pub fn source_schema(&mut self, source_schema: &str) -> &mut Self {
        self.source_schema = source_schema.to_string();
        self
    }

    pub fn prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn pool_config(&mut self, pool_config: PoolConfig) -> &mut Self {
        self.pool_config = pool_config;
        self
    }

    /// Creates a factory that checks connections out of `pool`.
    pub fn build(&self, pool: Pool) -> Result<Factory> {
        self.validate()?;
        Ok(Factory::new(pool, &self.source_schema, &self.prefix))
    }

    /// Creates a factory with its own pool, connecting to `url`.
    pub fn connect(&self, url: &str) -> Result<Factory> {
        self.validate()?;
        let pool = Pool::with_config(Connect::new(url)?, self.pool_config.clone())?;
        Ok(Factory::new(pool, &self.source_schema, &self.prefix))
    }

    fn validate(&self) -> Result<()> {
        if self.source_schema.is_empty() {
            bail!("source schema must not be empty");
        }

        if self.prefix.is_empty() {
            bail!("schema name prefix must not be empty");
        }

        // A release of `<prefix>_<n>` would otherwise be indistinguishable from dropping the
        // source schema.
        let generated = self
            .source_schema
            .strip_prefix(&self.prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));

        if generated {
            bail!(
                "source schema `{}` collides with generated names `{}_<n>`",
                self.source_schema,
                self.prefix
            );
        }

        Ok(())
    }
}
