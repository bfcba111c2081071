//! HTTP response data models.
//!
//! This module defines the structures produced by the executor: the response
//! snapshot itself and the execution result wrapper consumed by the UI.

use crate::executor::error::ExecutionError;
use crate::models::request::RequestDefinition;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Represents an HTTP response received from a server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    ///
    /// `Vec<u8>` rather than `String` so binary responses survive intact;
    /// the formatter decides how to render them.
    pub body: Vec<u8>,

    /// Value of the Content-Type header, empty when the server sent none.
    pub content_type: String,

    /// Total request duration from dispatch to complete body download.
    pub duration: Duration,

    /// Wall-clock time at which the request was dispatched.
    pub request_time: DateTime<Utc>,

    /// Response body size in bytes.
    pub size: usize,
}

impl HttpResponse {
    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Checks if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

/// The outcome of dispatching one request.
///
/// Created per dispatched request, immutable afterwards, and discarded when
/// the next request is selected. A failed dispatch may still carry a partial
/// response (status and headers received before the body read failed).
#[derive(Debug)]
pub struct ExecutionResult {
    /// The request definition that was dispatched (post-parse, pre-substitution).
    pub request: RequestDefinition,

    /// The response snapshot, when one was received.
    pub response: Option<HttpResponse>,

    /// The failure cause, when the dispatch did not complete.
    pub error: Option<ExecutionError>,

    /// Whether the dispatch completed and the full body was read.
    pub success: bool,
}

impl ExecutionResult {
    /// Creates a successful result from a response snapshot.
    pub fn success(request: RequestDefinition, response: HttpResponse) -> Self {
        Self {
            request,
            response: Some(response),
            error: None,
            success: true,
        }
    }

    /// Creates a failed result, optionally keeping a partial response.
    pub fn failure(
        request: RequestDefinition,
        error: ExecutionError,
        response: Option<HttpResponse>,
    ) -> Self {
        Self {
            request,
            response,
            error: Some(error),
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::HttpMethod;

    fn sample_response(status_code: u16) -> HttpResponse {
        HttpResponse {
            status_code,
            status_text: "OK".to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
            content_type: String::new(),
            duration: Duration::from_millis(42),
            request_time: Utc::now(),
            size: 0,
        }
    }

    fn sample_request() -> RequestDefinition {
        RequestDefinition {
            id: "req-1".to_string(),
            method: HttpMethod::GET,
            url: "https://example.com".to_string(),
            http_version: None,
            headers: HashMap::new(),
            body: String::new(),
            description: String::new(),
            line_start: 1,
            line_end: 1,
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(sample_response(200).is_success());
        assert!(sample_response(204).is_success());
        assert!(!sample_response(301).is_success());
        assert!(sample_response(404).is_client_error());
        assert!(sample_response(500).is_server_error());
    }

    #[test]
    fn test_execution_result_success() {
        let result = ExecutionResult::success(sample_request(), sample_response(200));
        assert!(result.success);
        assert!(result.response.is_some());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_execution_result_failure_keeps_partial_response() {
        let result = ExecutionResult::failure(
            sample_request(),
            ExecutionError::Network("connection reset".to_string()),
            Some(sample_response(502)),
        );
        assert!(!result.success);
        assert!(result.response.is_some());
        assert!(result.error.is_some());
    }
}
