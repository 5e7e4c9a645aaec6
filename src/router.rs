use crate::handlers::{
    health::health_check,
    proxy::{countries, other, predict},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{any, get},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));
    let timeout = state.config.request_timeout() + Duration::from_secs(5);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction service routes
        .route("/api/countries", any(countries))
        .route("/api/predict", any(predict))
        .route("/api/*rest", any(other))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Built frontend, unknown paths fall back to index.html
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Add a Prometheus `/metrics` endpoint.
///
/// Installs the global metrics recorder, so call it at most once per process.
pub fn with_metrics(router: Router) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    router
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(prometheus_layer)
}
