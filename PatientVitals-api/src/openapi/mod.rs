use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Patient endpoints
        crate::api::handlers::patients::get_patient,

        // Vital endpoints
        crate::api::handlers::vitals::add_vital
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::PublicErrorResponse,
            crate::entities::common::PatientDocument,
            crate::entities::vitals::VitalReadingRequest,
            crate::entities::vitals::CreatedVitalResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient record lookup"),
        (name = "vitals", description = "Vital reading ingestion")
    ),
    info(
        title = "Patient Vitals API",
        version = "0.1.0",
        description = "Patient record lookup and vital reading ingestion",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
