//! API Router with Swagger UI

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsSettings;
use crate::domain::{
    CompanyAbout, CompanyContact, CompanyProfile, ContactStatus, ContactSubmission,
    NewContactSubmission, Service, ServiceDetail,
};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{company, contact, diagnostics, health, services};
use crate::interfaces::http::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::api_root,
        health::health_check,
        services::list_services,
        services::get_service,
        company::get_company,
        contact::submit_contact,
        diagnostics::list_collections,
    ),
    components(
        schemas(
            ApiResponse<String>,
            Service,
            ServiceDetail,
            CompanyProfile,
            CompanyAbout,
            CompanyContact,
            NewContactSubmission,
            ContactSubmission,
            ContactStatus,
            health::RootResponse,
            health::HealthResponse,
            health::ComponentHealth,
            diagnostics::CollectionsResponse,
        )
    ),
    tags(
        (name = "Health", description = "API status and store connectivity"),
        (name = "Services", description = "Service catalog, served from static content when the store is unavailable"),
        (name = "Company", description = "Company profile"),
        (name = "Contact", description = "Contact form submissions"),
        (name = "Diagnostics", description = "Document store inspection"),
    ),
    info(
        title = "AximoIX API",
        version = "1.0.0",
        description = "AximoIX website backend: services, company profile and contact intake"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is given.
pub fn create_api_router(
    state: AppState,
    cors: &CorsSettings,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let api_routes = Router::new()
        .route("/api", get(health::api_root))
        .route("/api/", get(health::api_root))
        .route("/api/health", get(health::health_check))
        .route("/api/services", get(services::list_services))
        .route("/api/services/{service_id}", get(services::get_service))
        .route("/api/company", get(company::get_company))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/debug/collections", get(diagnostics::list_collections))
        .with_state(state);

    let swagger_routes =
        SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi());

    let mut router = Router::new().merge(swagger_routes).merge(api_routes);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(cors))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if settings.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

// ── Tests ──────────────────────────────────────────────────────
