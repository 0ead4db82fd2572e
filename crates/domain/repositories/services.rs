use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::services::{InsertServiceEntity, ServiceEntity},
    errors::StoreError,
};

#[async_trait]
#[automock]
pub trait ServiceRepository {
    /// Active services only, newest `created_at` first.
    async fn list_active(&self) -> Result<Vec<ServiceEntity>, StoreError>;
    async fn insert_many(&self, services: Vec<InsertServiceEntity>) -> Result<usize, StoreError>;
    async fn delete_all(&self) -> Result<usize, StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
}
