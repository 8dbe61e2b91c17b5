use anyhow::Context as _;
use postgres::{tls::MakeTlsConnect, Socket};
use schemata_core::{
    async_trait,
    driver::{Driver, Response},
    Error, Result, Statement,
};
use schemata_sql::Serializer;
use tokio_postgres::{Client, Config, NoTls};
use url::Url;

/// PostgreSQL truncates identifiers longer than `NAMEDATALEN - 1` bytes.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Opens plain-text (`NoTls`) connections to a PostgreSQL server.
#[derive(Debug, Clone)]
pub struct PostgreSQL {
    config: Config,
}

impl PostgreSQL {
    /// Creates a driver from a connection URL.
    ///
    /// Both the `postgresql` and `postgres` schemes are accepted. The URL must name a host and a
    /// database; user, password and port are optional.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid connection URL; url={url}"))?;

        if !matches!(url.scheme(), "postgresql" | "postgres") {
            schemata_core::bail!(
                "connection URL does not have a `postgresql` scheme; url={}",
                url
            );
        }

        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("missing host in connection URL; url={}", url))?;

        if url.path().trim_start_matches('/').is_empty() {
            schemata_core::bail!(
                "no database specified - missing path in connection URL; url={}",
                url
            );
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(url.path().trim_start_matches('/'));

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self::from_config(config))
    }

    /// Creates a driver from an already populated [`tokio_postgres::Config`].
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    async fn connect(&self) -> Result<Box<dyn schemata_core::Connection>> {
        let connection = Connection::connect_with_config(self.config.clone(), NoTls).await?;
        Ok(Box::new(connection))
    }
}

/// A single PostgreSQL session.
#[derive(Debug)]
pub struct Connection {
    /// The PostgreSQL client.
    client: Client,
}

impl Connection {
    /// Wraps an already established client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects using a [`tokio_postgres::Config`] and TLS connector.
    ///
    /// The connection future is spawned onto the current tokio runtime.
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("postgresql connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }
}

impl From<Client> for Connection {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl schemata_core::Connection for Connection {
    async fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        check_identifiers(stmt)?;

        let sql = Serializer::postgresql().serialize(stmt);

        if stmt.returns_value() {
            let row = self
                .client
                .query_one(sql.as_str(), &[])
                .await
                .map_err(Error::driver)?;
            let value = row.try_get::<_, Option<String>>(0).map_err(Error::driver)?;
            return Ok(Response::value(value));
        }

        let count = self.client.execute(sql.as_str(), &[]).await.map_err(Error::driver)?;
        Ok(Response::count(count))
    }
}

fn check_identifiers(stmt: &Statement) -> Result<()> {
    for ident in stmt.idents() {
        if ident.is_empty() {
            return Err(Error::invalid_statement("identifier is empty"));
        }

        if ident.len() > MAX_IDENTIFIER_LEN {
            return Err(Error::invalid_statement(format!(
                "identifier `{ident}` is {} bytes; PostgreSQL truncates identifiers longer than \
                 {MAX_IDENTIFIER_LEN} bytes",
                ident.len()
            )));
        }
    }

    Ok(())
}
