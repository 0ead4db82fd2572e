use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    Connection, PgConnection,
    connection::CacheSize,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};

use crate::{
    domain::errors::StoreError,
    infra::db::connection_manager::{self, Connector},
};

#[derive(Debug, Default)]
struct DisablePreparedStatements;

impl CustomizeConnection<PgConnection, R2d2Error> for DisablePreparedStatements {
    fn on_acquire(&self, conn: &mut PgConnection) -> std::result::Result<(), R2d2Error> {
        conn.set_prepared_statement_cache_size(CacheSize::Disabled);
        Ok(())
    }
}

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

pub type PgConnectionManager = connection_manager::ConnectionManager<PgConnector>;

#[derive(Debug, Clone)]
pub struct PgConnectOptions {
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PgConnectOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Blocks until the pool holds its first connection or `connect_timeout` passes.
pub fn establish_connection(database_url: &str, options: &PgConnectOptions) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(options.max_connections)
        .min_idle(Some(1))
        .connection_timeout(options.connect_timeout)
        .connection_customizer(Box::new(DisablePreparedStatements::default()))
        .build(manager)?;
    Ok(pool)
}

pub struct PgConnector {
    database_url: String,
    options: PgConnectOptions,
}

impl PgConnector {
    pub fn new(database_url: impl Into<String>, options: PgConnectOptions) -> Self {
        Self {
            database_url: database_url.into(),
            options,
        }
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Handle = PgPoolSquad;

    async fn establish(&self) -> Result<PgPoolSquad> {
        let database_url = self.database_url.clone();
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || establish_connection(&database_url, &options)).await?
    }
}

/// Acquires the shared pool, checks out a connection and runs `query` on the
/// blocking thread pool.
pub async fn run_query<T, F>(connections: &PgConnectionManager, query: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
{
    let pool = connections.connect().await?;

    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(StoreError::connection)?;
        query(&mut *conn)
    })
    .await
    .map_err(StoreError::query)?
}
