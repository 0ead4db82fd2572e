use crate::{
    axum_http::{
        error_responses::{AppError, ServicesResponse},
        routers::revalidate_header,
    },
    usecases::catalog::CatalogUseCase,
};
use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use crates::domain::repositories::services::ServiceRepository;
use std::sync::Arc;
use tracing::{error, info};

pub fn routes<T>(catalog_usecase: Arc<CatalogUseCase<T>>) -> Router
where
    T: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/api/services", get(list_services))
        .with_state(catalog_usecase)
}

pub async fn list_services<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ServiceRepository + Send + Sync + 'static,
{
    match catalog_usecase.list_active_services().await {
        Ok(services) => {
            info!(count = services.len(), "services: catalog served");
            Ok((revalidate_header(), Json(ServicesResponse::new(services))))
        }
        Err(err) => {
            error!(error = ?err, "services: failed to fetch services");
            Err(AppError::FetchServices(err))
        }
    }
}
