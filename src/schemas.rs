use common::{CountriesResponse, ErrorDetail, Gender, PredictionForm, PredictionModel, PredictionResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client used to reach the prediction service
    pub client: reqwest::Client,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(client: reqwest::Client, config: ServerConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction service requests are forwarded to
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::proxy::countries,
        crate::handlers::proxy::predict,
    ),
    components(
        schemas(
            HealthResponse,
            CountriesResponse,
            PredictionForm,
            PredictionResponse,
            ErrorDetail,
            Gender,
            PredictionModel,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Endpoints forwarded to the prediction service"),
    ),
    info(
        title = "Life Expectancy Predictor API",
        description = "Development server for the life expectancy prediction form",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
