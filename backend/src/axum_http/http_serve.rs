use crate::{
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
    usecases::catalog::CatalogUseCase,
};
use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use crates::{
    domain::repositories::services::ServiceRepository,
    infra::db::{
        postgres::postgres_connection::PgConnectionManager,
        repositories::services::ServicePostgres,
    },
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

/// Routes without the tower layers; the page and the API share one use case.
pub fn app<T>(catalog_usecase: Arc<CatalogUseCase<T>>) -> Router
where
    T: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        .fallback(default_routers::not_found)
        .merge(routers::home::routes(Arc::clone(&catalog_usecase)))
        .merge(routers::services::routes(catalog_usecase))
        .route("/api/health-check", get(default_routers::health_check))
}

pub async fn start(config: Arc<DotEnvyConfig>, connections: Arc<PgConnectionManager>) -> Result<()> {
    let service_repository = ServicePostgres::new(Arc::clone(&connections));
    let catalog_usecase = Arc::new(CatalogUseCase::new(Arc::new(service_repository)));

    let app = app(catalog_usecase)
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use crates::domain::repositories::services::MockServiceRepository;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(CatalogUseCase::new(Arc::new(
            MockServiceRepository::new(),
        ))))
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health-check")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/clients")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn catalog_route_rejects_writes() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
