use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::db::postgres::postgres_connection::{
    PgConnectOptions, PgConnectionManager, PgConnector,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let connector = PgConnector::new(
        dotenvy_env.database.url.clone(),
        PgConnectOptions {
            max_connections: dotenvy_env.database.max_connections,
            connect_timeout: dotenvy_env.database.connect_timeout,
        },
    );
    let connections = Arc::new(PgConnectionManager::new(connector));

    // Requests retry the connection on their own, so a cold database is not fatal.
    match connections.connect().await {
        Ok(_) => info!("Postgres connection has been established"),
        Err(err) => warn!(error = ?err, "Postgres is not reachable yet, serving anyway"),
    }

    http_serve::start(Arc::new(dotenvy_env), connections).await?;

    Ok(())
}
