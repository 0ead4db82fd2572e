use chrono::Utc;
use crates::domain::{
    errors::StoreError,
    repositories::{clients::ClientRepository, services::ServiceRepository},
    value_objects::{
        clients::{ClientCandidate, ValidatedClient},
        services::{ServiceCandidate, ValidatedService},
    },
};
use std::{collections::HashSet, sync::Arc};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub services: i64,
    pub clients: i64,
}

/// Replaces the contents of both collections with a fixed data set.
pub struct SeedUseCase<S, C>
where
    S: ServiceRepository + Send + Sync,
    C: ClientRepository + Send + Sync,
{
    service_repository: Arc<S>,
    client_repository: Arc<C>,
}

impl<S, C> SeedUseCase<S, C>
where
    S: ServiceRepository + Send + Sync,
    C: ClientRepository + Send + Sync,
{
    pub fn new(service_repository: Arc<S>, client_repository: Arc<C>) -> Self {
        Self {
            service_repository,
            client_repository,
        }
    }

    /// Nothing is deleted unless every candidate validates first.
    pub async fn run(
        &self,
        services: Vec<ServiceCandidate>,
        clients: Vec<ClientCandidate>,
    ) -> Result<SeedReport, StoreError> {
        let services = validate_services(&services)?;
        let clients = validate_clients(&clients)?;

        let removed_services = self.service_repository.delete_all().await?;
        let removed_clients = self.client_repository.delete_all().await?;
        info!(removed_services, removed_clients, "seed: collections cleared");

        let now = Utc::now();

        let inserted_services = self
            .service_repository
            .insert_many(
                services
                    .into_iter()
                    .map(|service| service.into_insert_entity(now))
                    .collect(),
            )
            .await?;
        info!(inserted = inserted_services, "seed: services inserted");

        let inserted_clients = self
            .client_repository
            .insert_many(
                clients
                    .into_iter()
                    .map(|client| client.into_insert_entity(now))
                    .collect(),
            )
            .await?;
        info!(inserted = inserted_clients, "seed: clients inserted");

        let report = SeedReport {
            services: self.service_repository.count().await?,
            clients: self.client_repository.count().await?,
        };
        info!(services = report.services, clients = report.clients, "seed: collections verified");

        Ok(report)
    }
}

fn validate_services(candidates: &[ServiceCandidate]) -> Result<Vec<ValidatedService>, StoreError> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            candidate.validate().map_err(|errors| {
                error!(index, %errors, "seed: invalid service");
                StoreError::from(errors)
            })
        })
        .collect()
}

fn validate_clients(candidates: &[ClientCandidate]) -> Result<Vec<ValidatedClient>, StoreError> {
    let mut seen = HashSet::new();
    let mut clients = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.iter().enumerate() {
        let client = candidate.validate().map_err(|errors| {
            error!(index, %errors, "seed: invalid client");
            StoreError::from(errors)
        })?;

        if !seen.insert(client.email.clone()) {
            error!(index, email = %client.email, "seed: duplicate client email");
            return Err(StoreError::UniquenessViolation {
                collection: "clients",
                field: "email",
                value: client.email,
            });
        }

        clients.push(client);
    }

    Ok(clients)
}
