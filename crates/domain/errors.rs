use thiserror::Error;

use crate::domain::value_objects::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[source] anyhow::Error),

    #[error("{collection}.{field} must be unique, `{value}` already exists")]
    UniquenessViolation {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("database query failed: {0}")]
    Query(#[source] anyhow::Error),
}

impl StoreError {
    pub fn connection(error: impl Into<anyhow::Error>) -> Self {
        Self::Connection(error.into())
    }

    pub fn query(error: impl Into<anyhow::Error>) -> Self {
        Self::Query(error.into())
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
