use anyhow::Result;
use backend::{config::config_loader, usecases::seed::SeedUseCase};
use crates::{
    domain::value_objects::{clients::ClientCandidate, services::ServiceCandidate},
    infra::db::{
        postgres::postgres_connection::{PgConnectOptions, PgConnectionManager, PgConnector},
        repositories::{clients::ClientPostgres, services::ServicePostgres},
    },
};
use std::sync::Arc;
use tracing::{error, info};

const SERVICES_FIXTURE: &str = include_str!("../../seed/services.json");
const CLIENTS_FIXTURE: &str = include_str!("../../seed/clients.json");

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Seed failed: {:?}", error);
        std::process::exit(1);
    }
}

fn fixtures() -> Result<(Vec<ServiceCandidate>, Vec<ClientCandidate>)> {
    let services = serde_json::from_str(SERVICES_FIXTURE)?;
    let clients = serde_json::from_str(CLIENTS_FIXTURE)?;
    Ok((services, clients))
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("seed")?;

    let database_url = config_loader::load_database_url()?;
    let (services, clients) = fixtures()?;

    let connections = Arc::new(PgConnectionManager::new(PgConnector::new(
        database_url,
        PgConnectOptions::default(),
    )));
    connections.connect().await?;
    info!("Postgres connection has been established");

    let seed_usecase = SeedUseCase::new(
        Arc::new(ServicePostgres::new(Arc::clone(&connections))),
        Arc::new(ClientPostgres::new(connections)),
    );

    let report = seed_usecase.run(services, clients).await?;
    info!(
        services = report.services,
        clients = report.clients,
        "Database seeded"
    );

    Ok(())
}
