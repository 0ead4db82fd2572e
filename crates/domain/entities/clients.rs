use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::clients;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = clients)]
pub struct InsertClientEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub active: bool,
    pub services_used: Vec<String>,
    pub created_at: DateTime<Utc>,
}
