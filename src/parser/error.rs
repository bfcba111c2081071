//! Error types for request document parsing.
//!
//! Parsing only fails on a low-level read fault; content the parser cannot
//! classify is absorbed by the line rules, never reported as an error.

use std::fmt;
use std::io;

/// Errors that can occur while parsing a request document.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying line source failed mid-read.
    ///
    /// No partial document is returned; the caller gets the cause and the
    /// parse is abandoned.
    ReadFailure {
        /// The I/O error reported by the source.
        source: io::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ReadFailure { source } => {
                write!(f, "error reading request document: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::ReadFailure { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failure_display() {
        let err = ParseError::ReadFailure {
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("error reading request document"));
        assert!(msg.contains("truncated"));
    }

    #[test]
    fn test_read_failure_source() {
        use std::error::Error;

        let err = ParseError::ReadFailure {
            source: io::Error::new(io::ErrorKind::Other, "disk fault"),
        };
        assert!(err.source().is_some());
    }
}
