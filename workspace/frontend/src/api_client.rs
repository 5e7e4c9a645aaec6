pub mod prediction;

use common::{detail_from_body, failure_message};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::settings;

/// Failure of a call to the prediction API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error {status}")]
    Http { status: u16, detail: Option<String> },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for the user: the server supplied `detail`, or the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { detail, .. } => failure_message(detail.as_deref()),
            ApiError::Network(_) | ApiError::Encode(_) | ApiError::Decode(_) => failure_message(None),
        }
    }
}

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Turns a non-OK response into `ApiError::Http`, keeping the body's `detail` if any.
async fn http_error(method: &str, endpoint: &str, response: Response) -> ApiError {
    let status = response.status();
    log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);

    let body = response.text().await.unwrap_or_default();
    let detail = detail_from_body(&body);
    match &detail {
        Some(detail) => log::error!("{} {} - API error: {}", method, endpoint, detail),
        None => log::error!("{} {} - HTTP error: {}", method, endpoint, status),
    }

    ApiError::Http { status, detail }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            ApiError::Network(e.to_string())
        })?;

    if !response.ok() {
        return Err(http_error("GET", endpoint, response).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        log::error!("GET {} - Failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            ApiError::Encode(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ApiError::Network(e.to_string())
        })?;

    if !response.ok() {
        return Err(http_error("POST", endpoint, response).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        log::error!("POST {} - Failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::FALLBACK_ERROR_MESSAGE;

    #[test]
    fn test_http_error_with_detail_shows_detail() {
        let error = ApiError::Http {
            status: 422,
            detail: Some("bad input".to_string()),
        };
        assert_eq!(error.user_message(), "bad input");
    }

    #[test]
    fn test_http_error_without_detail_shows_fallback() {
        let error = ApiError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_transport_errors_show_fallback() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::Decode("missing field `prediction`".to_string()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_encode_error_is_distinct_from_decode() {
        let error = ApiError::Encode("key must be a string".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to encode request: key must be a string"
        );
        assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(error.to_string(), "HTTP error 502");
    }
}
