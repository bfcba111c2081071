//! HTTP dispatch error types.

use std::fmt;

/// Errors that can occur while dispatching a request.
#[derive(Debug, Clone)]
pub enum ExecutionError {
    /// The HTTP request could not be constructed from the definition.
    BuildFailed(String),

    /// Network-level failure: connection refused, DNS, reset, etc.
    Network(String),

    /// The request exceeded the dispatch timeout.
    Timeout,

    /// The response arrived but its body could not be read.
    BodyRead(String),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::BuildFailed(msg) => write!(f, "failed to build request: {}", msg),
            ExecutionError::Network(msg) => write!(f, "request failed: {}", msg),
            ExecutionError::Timeout => write!(f, "request timed out"),
            ExecutionError::BodyRead(msg) => write!(f, "failed to read response body: {}", msg),
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Maps reqwest errors onto the dispatch taxonomy.
impl From<reqwest::Error> for ExecutionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExecutionError::Timeout
        } else if err.is_connect() {
            ExecutionError::Network(format!("connection failed: {}", err))
        } else if err.is_builder() {
            ExecutionError::BuildFailed(err.to_string())
        } else {
            ExecutionError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", ExecutionError::BuildFailed("bad url".to_string())),
            "failed to build request: bad url"
        );
        assert_eq!(format!("{}", ExecutionError::Timeout), "request timed out");
        assert!(format!("{}", ExecutionError::Network("reset".to_string())).contains("reset"));
    }
}
