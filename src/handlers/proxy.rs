//! Forwarding of `/api/*` calls to the remote prediction service.
//!
//! Status codes and bodies from upstream are passed through untouched so the
//! frontend sees the service's own `detail` messages.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{
        StatusCode,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::{IntoResponse, Json, Response},
};
use common::{CountriesResponse, ErrorDetail, PredictionForm, PredictionResponse};
use thiserror::Error;
use tracing::{debug, error, instrument, warn};
use crate::schemas::AppState;

/// Largest request body accepted for forwarding
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Error types for request forwarding
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The incoming request body could not be read
    #[error("Invalid request body: {0}")]
    Body(String),

    /// The prediction service could not be reached or its response could not be read
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The response for the client could not be assembled
    #[error("Response error: {0}")]
    Response(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::Body(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Response(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            ProxyError::Body(_) => "Invalid request body",
            ProxyError::Upstream(_) => "Upstream prediction service unavailable",
            ProxyError::Response(_) => "Failed to relay prediction service response",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (self.status(), Json(ErrorDetail::new(self.detail()))).into_response()
    }
}

/// List of selectable countries, forwarded to the prediction service
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "prediction",
    responses(
        (status = 200, description = "Country names", body = CountriesResponse),
        (status = 502, description = "Prediction service unavailable", body = ErrorDetail)
    )
)]
#[instrument(skip(state, request))]
pub async fn countries(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    forward(&state, request).await
}

/// Life expectancy prediction, forwarded to the prediction service
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "prediction",
    request_body = PredictionForm,
    responses(
        (status = 200, description = "Predicted life expectancy", body = PredictionResponse),
        (status = 422, description = "Rejected input", body = ErrorDetail),
        (status = 502, description = "Prediction service unavailable", body = ErrorDetail)
    )
)]
#[instrument(skip(state, request))]
pub async fn predict(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    forward(&state, request).await
}

/// Any other `/api/*` path
#[instrument(skip(state, request), fields(path = %request.uri().path()))]
pub async fn other(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    forward(&state, request).await
}

/// Sends `request` to the prediction service and relays status, content type and body
pub async fn forward(state: &AppState, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let target = state.config.upstream_target(path_and_query);
    debug!("Forwarding {} {} to {}", parts.method, path_and_query, target);

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut upstream = state.client.request(parts.method.clone(), &target);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = parts.headers.get(&name) {
            upstream = upstream.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let response = upstream.send().await?;
    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let bytes = response.bytes().await?;

    if status.is_success() {
        debug!("{} {} - upstream answered {}", parts.method, path_and_query, status);
    } else {
        warn!("{} {} - upstream answered {}", parts.method, path_and_query, status);
    }

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::Response(e.to_string()))
}
