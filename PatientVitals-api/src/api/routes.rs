use axum::{
    routing::{any, get},
    Router,
    Extension,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use patient_vitals_domain::repository::SharedDocumentStore;
use patient_vitals_domain::services::{create_patient_service, create_vital_service};
use crate::api::handlers::{health, patients, vitals, ApiError};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Patient lookups
    pub patient_service: patients::SharedPatientService,
    /// Vital ingestion
    pub vital_service: vitals::SharedVitalService,
    /// Deployment environment reported by the health endpoint
    pub environment: String,
}

/// Create the application router over a document store
pub fn create_app(store: SharedDocumentStore, config: &ServerConfig) -> Router {
    debug!("Creating application router");

    let state = AppState {
        patient_service: create_patient_service(store.clone()),
        vital_service: create_vital_service(store.clone()),
        environment: config.environment.clone(),
    };
    let health_service = health::create_health_service(store);

    // Start the uptime clock reported by the health endpoint
    health::initialize_server_start_time();

    create_router(state, health_service, config.max_concurrent_requests)
}

/// Assemble routes and middleware around already-built services
pub fn create_router(
    state: AppState,
    health_service: health::SharedHealthService,
    max_concurrent_requests: usize,
) -> Router {
    // Handlers see the path relative to these prefixes
    let lookup_routes = Router::new()
        .route("/*path", any(patients::get_patient))
        .fallback(route_not_found);
    let ingest_routes = Router::new()
        .route("/*path", any(vitals::add_vital))
        .fallback(route_not_found);

    // All methods reach the handlers so they can answer 405 themselves
    let api_routes = Router::new()
        .route("/patients/:id", any(patients::get_patient))
        .route("/patients/:id/", any(patients::get_patient))
        .route("/patients/:id/vitals", any(vitals::add_vital))
        .route("/patients/:id/vitals/", any(vitals::add_vital))
        .nest("/get_patient", lookup_routes)
        .nest("/add_vital", ingest_routes);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(api_routes)
        .merge(public_routes)
        .fallback(route_not_found)
        .with_state(state);

    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // One semaphore for every route; requests are traced once admitted
    app.layer(TraceLayer::new_for_http())
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent_requests))
}

/// JSON 404 for paths no route matches
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
