//! HTTP request dispatch.
//!
//! Substitutes a request definition's URL, headers, and body against the
//! resolved variable table - completely, before anything touches the
//! network - then performs the call with reqwest and packages the outcome
//! as an immutable [`ExecutionResult`]. Retry and cancellation logic do not
//! live here; a dispatch is one attempt, one snapshot.

pub mod error;

pub use error::ExecutionError;

use crate::models::{ExecutionResult, HttpMethod, HttpResponse, RequestDefinition};
use crate::variables::{substitute, VariableTable};
use chrono::Utc;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Dispatch timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Converts our method enum to reqwest's.
fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::TRACE => reqwest::Method::TRACE,
        HttpMethod::CONNECT => reqwest::Method::CONNECT,
    }
}

/// Dispatches one request and returns its execution result.
///
/// The URL, every header value, and the body are substituted against
/// `table` before the request is built. Failures are captured in the
/// result rather than returned as `Err`: the caller always gets a result
/// to display.
///
/// # Arguments
///
/// * `request` - The request definition to dispatch
/// * `table` - The resolved variable table for substitution
pub async fn execute(request: &RequestDefinition, table: &VariableTable) -> ExecutionResult {
    let started = Instant::now();
    let request_time = Utc::now();

    let url = substitute(&request.url, table);
    tracing::info!(id = %request.id, method = %request.method, url = %url, "dispatching request");

    let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            return ExecutionResult::failure(
                request.clone(),
                ExecutionError::BuildFailed(err.to_string()),
                None,
            )
        }
    };

    let mut builder = client.request(to_reqwest_method(request.method), &url);

    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), substitute(value, table));
    }

    if request.has_body() {
        builder = builder.body(substitute(&request.body, table));
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(id = %request.id, error = %err, "dispatch failed");
            return ExecutionResult::failure(request.clone(), err.into(), None);
        }
    };

    let status_code = response.status().as_u16();
    let status_text = response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            headers.insert(name.as_str().to_string(), value.to_string());
        }
    }
    let content_type = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
        .map(|(_, v)| v.clone())
        .unwrap_or_default();

    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            // Status and headers made it; keep them alongside the error.
            let partial = HttpResponse {
                status_code,
                status_text,
                headers,
                body: Vec::new(),
                content_type,
                duration: started.elapsed(),
                request_time,
                size: 0,
            };
            return ExecutionResult::failure(
                request.clone(),
                ExecutionError::BodyRead(err.to_string()),
                Some(partial),
            );
        }
    };

    let duration = started.elapsed();
    let size = body.len();
    tracing::info!(
        id = %request.id,
        status = status_code,
        bytes = size,
        elapsed_ms = duration.as_millis() as u64,
        "request completed"
    );

    ExecutionResult::success(
        request.clone(),
        HttpResponse {
            status_code,
            status_text,
            headers,
            body,
            content_type,
            duration,
            request_time,
            size,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariableDeclaration;

    fn request(method: HttpMethod, url: &str) -> RequestDefinition {
        RequestDefinition {
            id: "req-1".to_string(),
            method,
            url: url.to_string(),
            http_version: None,
            headers: HashMap::new(),
            body: String::new(),
            description: String::new(),
            line_start: 1,
            line_end: 1,
        }
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(to_reqwest_method(HttpMethod::GET), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::PATCH), reqwest::Method::PATCH);
        assert_eq!(
            to_reqwest_method(HttpMethod::OPTIONS),
            reqwest::Method::OPTIONS
        );
    }

    #[tokio::test]
    async fn test_unresolvable_url_fails_without_panicking() {
        let table = VariableTable::build(&[], &HashMap::new());
        let result = execute(&request(HttpMethod::GET, "not a url"), &table).await;

        assert!(!result.success);
        assert!(result.error.is_some());
        assert!(result.response.is_none());
    }

    #[tokio::test]
    async fn test_connection_refused_is_captured() {
        let table = VariableTable::build(&[], &HashMap::new());
        // Port 9 (discard) is a safe bet for a refused connection locally.
        let result = execute(&request(HttpMethod::GET, "http://127.0.0.1:9"), &table).await;

        assert!(!result.success);
        match result.error {
            Some(ExecutionError::Network(_)) | Some(ExecutionError::Timeout) => {}
            other => panic!("expected network failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_placeholders_in_url_are_substituted_before_dispatch() {
        let declarations = vec![VariableDeclaration {
            name: "host".to_string(),
            value: "127.0.0.1:9".to_string(),
            line: 1,
        }];
        let table = VariableTable::build(&declarations, &HashMap::new());
        let result = execute(&request(HttpMethod::GET, "http://{{host}}/x"), &table).await;

        // The substituted URL parses, so the failure is at the network layer,
        // not request building.
        assert!(!result.success);
        match result.error {
            Some(ExecutionError::Network(_)) | Some(ExecutionError::Timeout) => {}
            other => panic!("expected network failure, got {:?}", other),
        }
    }
}
