//! Domain layer health check functionality
//! This module provides health check services for the application

use patient_vitals_data::repository::DocumentStore;
use std::collections::HashMap;
use async_trait::async_trait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Name under which the document store is reported
pub const STORE_COMPONENT: &str = "store";

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Check if the document store answers a round trip
pub async fn check_store_status(store: &dyn DocumentStore) -> Result<(), String> {
    store
        .ping()
        .await
        .map_err(|e| format!("Document store error: {}", e))
}

/// Build system health from the store check result
pub fn system_health_from_store_status(store_status: Result<(), String>) -> SystemHealth {
    let store_component = match store_status {
        Ok(()) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    let overall_status = match store_component.status {
        ComponentStatus::Unhealthy => SystemStatus::Unhealthy,
        ComponentStatus::Healthy => SystemStatus::Healthy,
    };

    SystemHealth {
        status: overall_status,
        components: vec![
            (STORE_COMPONENT.to_string(), store_component),
        ].into_iter().collect(),
    }
}

/// Get overall system health for the given store
pub async fn get_system_health(store: &dyn DocumentStore) -> SystemHealth {
    system_health_from_store_status(check_store_status(store).await)
}
