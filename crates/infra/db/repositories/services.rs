use async_trait::async_trait;
use diesel::{RunQueryDsl, dsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain,
    infra::db::postgres::{
        postgres_connection::{PgConnectionManager, run_query},
        schema::services,
    },
};
use domain::{
    entities::services::{InsertServiceEntity, ServiceEntity},
    errors::StoreError,
    repositories::services::ServiceRepository,
};

type ActiveServices = dsl::Order<
    dsl::Filter<services::table, dsl::Eq<services::active, bool>>,
    (dsl::Desc<services::created_at>, dsl::Desc<services::id>),
>;

/// Active rows only, newest first; `id` breaks ties on `created_at`.
fn active_services() -> ActiveServices {
    services::table
        .filter(services::active.eq(true))
        .order((services::created_at.desc(), services::id.desc()))
}

pub struct ServicePostgres {
    connections: Arc<PgConnectionManager>,
}

impl ServicePostgres {
    pub fn new(connections: Arc<PgConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ServiceRepository for ServicePostgres {
    async fn list_active(&self) -> Result<Vec<ServiceEntity>, StoreError> {
        run_query(&self.connections, |conn| {
            active_services()
                .select(ServiceEntity::as_select())
                .load::<ServiceEntity>(conn)
                .map_err(StoreError::query)
        })
        .await
    }

    async fn insert_many(&self, entities: Vec<InsertServiceEntity>) -> Result<usize, StoreError> {
        run_query(&self.connections, move |conn| {
            diesel::insert_into(services::table)
                .values(&entities)
                .execute(conn)
                .map_err(StoreError::query)
        })
        .await
    }

    async fn delete_all(&self) -> Result<usize, StoreError> {
        run_query(&self.connections, |conn| {
            diesel::delete(services::table)
                .execute(conn)
                .map_err(StoreError::query)
        })
        .await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        run_query(&self.connections, |conn| {
            services::table
                .count()
                .get_result::<i64>(conn)
                .map_err(StoreError::query)
        })
        .await
    }
}
