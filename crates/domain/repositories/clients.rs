use async_trait::async_trait;
use mockall::automock;

use crate::domain::{entities::clients::InsertClientEntity, errors::StoreError};

#[async_trait]
#[automock]
pub trait ClientRepository {
    /// Fails with `StoreError::UniquenessViolation` when an email is already taken.
    async fn insert_many(&self, clients: Vec<InsertClientEntity>) -> Result<usize, StoreError>;
    async fn delete_all(&self) -> Result<usize, StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
}
