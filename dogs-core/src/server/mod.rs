//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::middleware::{normalize_error_response, ObservabilityLayer};
use crate::migration;
use crate::openapi::ApiDoc;
use crate::repository::{DogRepository, DogRepositoryImpl, DogStore, InMemoryDogRepository};
use crate::state::HasDogs;
use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dog_repo: Arc<DogStore>,
}

/// Implement HasDogs trait for production AppState
impl HasDogs for AppState {
    type DogRepo = DogStore;

    fn config(&self) -> &Config {
        &self.config
    }

    fn dog_repo(&self) -> &Self::DogRepo {
        &self.dog_repo
    }

    async fn check_ready(&self) -> bool {
        self.dog_repo.ping().await.is_ok()
    }
}

/// Select the storage backend from configuration
async fn create_dog_store(config: &Config) -> Result<DogStore> {
    let Some(database) = &config.database else {
        warn!("DATABASE_URL not set, dogs are kept in memory and lost on restart");
        return Ok(DogStore::Memory(InMemoryDogRepository::new()));
    };

    if database.run_migrations {
        migration::run_migrations(config).await?;
    }

    let db_pool = MySqlPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .connect(&database.url)
        .await?;

    info!("Connected to database");
    Ok(DogStore::MySql(DogRepositoryImpl::new(db_pool)))
}

pub async fn run(config: Config, metrics_handle: Option<PrometheusHandle>) -> Result<()> {
    let dog_store = create_dog_store(&config).await?;
    info!(backend = dog_store.backend_name(), "Dog repository ready");

    let config = Arc::new(config);
    let state = AppState {
        config: config.clone(),
        dog_repo: Arc::new(dog_store),
    };

    let mut app = build_router(state).merge(metrics_router(metrics_handle));

    if !config.is_production() {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::build()),
        );
        info!("Swagger UI available at /swagger-ui");
    }

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Router exposing the Prometheus exposition endpoint
pub fn metrics_router(handle: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/metrics", get(api::metrics::metrics_handler))
        .with_state(Arc::new(handle))
}

/// Build the HTTP router with generic state type
///
/// This function is generic over the state type, allowing it to work with
/// both production `AppState` and test implementations that implement `HasDogs`.
pub fn build_router<S: HasDogs>(state: S) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready::<S>))
        .route("/hello-world", get(api::hello::hello_world))
        // === Dog endpoints ===
        .route(
            "/api/dogs",
            get(api::dog::list::<S>).post(api::dog::create::<S>),
        )
        .route(
            "/api/dogs/{id}",
            get(api::dog::get::<S>)
                .put(api::dog::update::<S>)
                .delete(api::dog::delete::<S>),
        )
        .fallback(api::not_found)
        // Add middleware
        .layer(axum::middleware::from_fn(normalize_error_response))
        .layer(ObservabilityLayer)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
