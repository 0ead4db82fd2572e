use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crates::domain::{errors::StoreError, value_objects::services::ServiceModel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServicesResponse {
    pub success: bool,
    pub count: usize,
    pub services: Vec<ServiceModel>,
}

impl ServicesResponse {
    pub fn new(services: Vec<ServiceModel>) -> Self {
        Self {
            success: true,
            count: services.len(),
            services,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch services")]
    FetchServices(#[source] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only the fixed message goes out, the source stays in the logs.
        let status = match self {
            AppError::FetchServices(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
