//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and turning HTTP responses
//! into typed results.

use super::api_error::ApiError;
use super::config::{API_BASE_OVERRIDE, API_PORT};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Get the base URL for API requests
///
/// Uses `CATALOG_API_BASE` when it was set at build time, otherwise
/// the current window location with the API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/subcategories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Response bodies are accepted bare or wrapped as `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the `message` field out of an error body, if it has one.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response to `ApiError::Http`.
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_error_message(&body));
    Err(ApiError::Http { status, message })
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(&body)
}

/// Decode a body whose shape does not decide success. Missing or foreign
/// bodies yield `None`.
pub fn decode_body_lenient<T: DeserializeOwned>(body: &str) -> Option<T> {
    if body.trim().is_empty() {
        return None;
    }
    match decode_body(body) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("ignoring response body: {}", e);
            None
        }
    }
}

/// Like `read_json`, but any 2xx counts as success whatever its body.
pub async fn read_json_lenient<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    let response = ensure_ok(response).await?;
    match response.text().await {
        Ok(body) => Ok(decode_body_lenient(&body)),
        Err(e) => {
            log::debug!("unreadable response body: {}", e);
            Ok(None)
        }
    }
}
