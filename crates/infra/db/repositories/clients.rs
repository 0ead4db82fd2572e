use async_trait::async_trait;
use diesel::{
    RunQueryDsl,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use std::sync::Arc;

use crate::{
    domain,
    infra::db::postgres::{
        postgres_connection::{PgConnectionManager, run_query},
        schema::clients,
    },
};
use domain::{
    entities::clients::InsertClientEntity, errors::StoreError,
    repositories::clients::ClientRepository,
};

pub struct ClientPostgres {
    connections: Arc<PgConnectionManager>,
}

impl ClientPostgres {
    pub fn new(connections: Arc<PgConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ClientRepository for ClientPostgres {
    async fn insert_many(&self, entities: Vec<InsertClientEntity>) -> Result<usize, StoreError> {
        run_query(&self.connections, move |conn| {
            diesel::insert_into(clients::table)
                .values(&entities)
                .execute(conn)
                .map_err(map_insert_error)
        })
        .await
    }

    async fn delete_all(&self) -> Result<usize, StoreError> {
        run_query(&self.connections, |conn| {
            diesel::delete(clients::table)
                .execute(conn)
                .map_err(StoreError::query)
        })
        .await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        run_query(&self.connections, |conn| {
            clients::table
                .count()
                .get_result::<i64>(conn)
                .map_err(StoreError::query)
        })
        .await
    }
}

fn map_insert_error(error: DieselError) -> StoreError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let value = info
                .details()
                .and_then(duplicated_key_value)
                .unwrap_or_else(|| info.message().to_string());
            StoreError::UniquenessViolation {
                collection: "clients",
                field: "email",
                value,
            }
        }
        other => StoreError::query(other),
    }
}

/// Pulls `x` out of Postgres' `Key (email)=(x) already exists.` detail line.
fn duplicated_key_value(details: &str) -> Option<String> {
    let start = details.find(")=(")? + 3;
    let end = details.rfind(") already exists")?;
    (start <= end).then(|| details[start..end].to_string())
}
