//! Request document data models.
//!
//! This module defines the core data structures produced by the document
//! parser: variable declarations, request definitions, and the parsed
//! document that owns both.

use std::collections::HashMap;

/// HTTP request method.
///
/// Represents all standard HTTP methods as defined in RFC 7231 and RFC 5789.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP TRACE method - perform a message loop-back test
    TRACE,
    /// HTTP CONNECT method - establish a tunnel to the server
    CONNECT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a valid HTTP method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            "HEAD" => Some(HttpMethod::HEAD),
            "TRACE" => Some(HttpMethod::TRACE),
            "CONNECT" => Some(HttpMethod::CONNECT),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `@name = value` variable declaration found in the document.
///
/// The value is stored exactly as written, placeholders included; resolution
/// happens later against the full variable table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// Variable name (the identifier after `@`).
    pub name: String,

    /// Raw, unsubstituted value text.
    pub value: String,

    /// Line number in the source document (1-based).
    pub line: usize,
}

/// A single executable request definition parsed from the document.
///
/// Requests are finalized when the next request, section marker, or end of
/// input is reached and are never mutated afterwards. The URL, header values,
/// and body may contain `{{placeholder}}` text that is substituted just
/// before dispatch.
#[derive(Debug, Clone)]
pub struct RequestDefinition {
    /// Sequential identifier, `req-<n>` in document order starting at 1.
    ///
    /// IDs are dense and monotonic regardless of interleaved variable
    /// declarations or comments.
    pub id: String,

    /// HTTP method. Bare-URL lines imply GET.
    pub method: HttpMethod,

    /// Target URL, unsubstituted. May contain placeholders.
    pub url: String,

    /// Optional protocol-version token stripped from the method line,
    /// e.g. "HTTP/1.1".
    pub http_version: Option<String>,

    /// Request headers. A key appearing twice keeps the last occurrence.
    pub headers: HashMap<String, String>,

    /// Raw body text, unsubstituted. Empty when the request has no body.
    pub body: String,

    /// Description from the nearest preceding comment or section marker.
    /// Empty when none was given.
    pub description: String,

    /// First line of the request in the source document (1-based).
    pub line_start: usize,

    /// Last line of the request in the source document (1-based).
    pub line_end: usize,
}

impl RequestDefinition {
    /// Checks if the request has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Returns a one-line label for list display, e.g. `GET https://...`.
    pub fn title(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// The result of parsing one request document.
///
/// Owns the ordered declaration and request sequences; requests do not
/// reference declarations directly - the linkage is purely through shared
/// placeholder names, resolved later.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Variable declarations in file order.
    pub variables: Vec<VariableDeclaration>,

    /// Request definitions in file order.
    pub requests: Vec<RequestDefinition>,

    /// The original document lines, kept for diagnostics.
    pub raw_lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::POST.as_str(), "POST");
        assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("PATCH"), Some(HttpMethod::PATCH));
        assert_eq!(HttpMethod::from_str("FETCH"), None);
        // The document grammar is case-sensitive: lowercase verbs are body text.
        assert_eq!(HttpMethod::from_str("get"), None);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::GET), "GET");
        assert_eq!(format!("{}", HttpMethod::OPTIONS), "OPTIONS");
    }

    fn minimal_request() -> RequestDefinition {
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
    fn test_request_definition_has_body() {
        let mut request = minimal_request();
        assert!(!request.has_body());

        request.body = r#"{"key": "value"}"#.to_string();
        assert!(request.has_body());
    }

    #[test]
    fn test_request_definition_title() {
        let mut request = minimal_request();
        request.method = HttpMethod::POST;
        request.url = "https://api.example.com/users".to_string();

        assert_eq!(request.title(), "POST https://api.example.com/users");
    }
}
