use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Extension};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::Arc;
use once_cell::sync::OnceCell;
use async_trait::async_trait;

use patient_vitals_domain::health::{
    self, HealthServiceTrait, SystemStatus, ComponentStatus as DomainComponentStatus, SystemHealth,
    STORE_COMPONENT,
};
use patient_vitals_domain::repository::SharedDocumentStore;
use crate::api::routes::AppState;

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok" or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Unix timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about the components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Document store status
    pub store: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok" or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health service type for dependency injection
pub type SharedHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

// Time the server started, in seconds since the epoch
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Record the server start time; later calls keep the first value
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(unix_now);
}

/// Health check endpoint to verify the API and its store are reachable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 503, description = "The document store is unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip_all)]
pub async fn health_check(
    State(state): State<AppState>,
    Extension(health_service): Extension<SharedHealthService>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Unhealthy => "error",
    };

    let store = system_health.components.get(STORE_COMPONENT);
    let components = ComponentStatus {
        store: ComponentHealthStatus {
            status: map_component_status(
                &store.map(|c| c.status.clone()).unwrap_or(DomainComponentStatus::Unhealthy),
            ),
            message: store.and_then(|c| c.details.clone()),
        },
        api: ComponentHealthStatus {
            status: map_component_status(&DomainComponentStatus::Healthy),
            message: None,
        },
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components,
        environment: state.environment.clone(),
    };

    if system_health.status == SystemStatus::Healthy {
        (StatusCode::OK, Json(response))
    } else {
        warn!("Health check reports status '{}'", overall_status);
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Unhealthy => "error",
    }.to_string()
}

/// Health service backed by the process document store
pub struct HealthService {
    store: SharedDocumentStore,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService").finish_non_exhaustive()
    }
}

impl HealthService {
    /// Create a new health service
    pub fn new(store: SharedDocumentStore) -> Self {
        HealthService { store }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        health::get_system_health(self.store.as_ref()).await
    }
}

/// Factory function to create a health service
pub fn create_health_service(store: SharedDocumentStore) -> SharedHealthService {
    Arc::new(HealthService::new(store))
}
