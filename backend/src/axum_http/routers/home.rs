use crate::{
    axum_http::routers::revalidate_header, usecases::catalog::CatalogUseCase,
    views::home::render_home,
};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use crates::domain::repositories::services::ServiceRepository;
use std::sync::Arc;
use tracing::error;

pub fn routes<T>(catalog_usecase: Arc<CatalogUseCase<T>>) -> Router
where
    T: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home_page))
        .with_state(catalog_usecase)
}

/// Unlike the JSON endpoint, a failed query never reaches the visitor: the
/// page renders as if the catalog were empty.
pub async fn home_page<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
) -> impl IntoResponse
where
    T: ServiceRepository + Send + Sync + 'static,
{
    match catalog_usecase.list_active_services().await {
        Ok(services) => (revalidate_header(), Html(render_home(&services))).into_response(),
        Err(err) => {
            error!(error = ?err, "home: failed to fetch services, rendering empty catalog");
            Html(render_home(&[])).into_response()
        }
    }
}
