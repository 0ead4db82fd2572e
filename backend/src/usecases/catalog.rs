use crates::domain::{
    errors::StoreError, repositories::services::ServiceRepository,
    value_objects::services::ServiceModel,
};
use std::sync::Arc;
use tracing::debug;

/// Seconds downstream caches may serve a catalog response before revalidating.
pub const REVALIDATE_SECONDS: u64 = 3600;

/// The one read path of the site, shared by the JSON endpoint and the home page.
pub struct CatalogUseCase<T>
where
    T: ServiceRepository + Send + Sync,
{
    service_repository: Arc<T>,
}

impl<T> CatalogUseCase<T>
where
    T: ServiceRepository + Send + Sync,
{
    pub fn new(service_repository: Arc<T>) -> Self {
        Self { service_repository }
    }

    /// Active services, most recently created first, detached from the database.
    pub async fn list_active_services(&self) -> Result<Vec<ServiceModel>, StoreError> {
        let services = self.service_repository.list_active().await?;
        debug!(count = services.len(), "catalog: active services loaded");

        Ok(services.into_iter().map(ServiceModel::from).collect())
    }
}
