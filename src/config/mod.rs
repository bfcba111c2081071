//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Terminal UI for running HTTP requests from .http files.
#[derive(Parser, Debug)]
#[command(name = "reqtui", author, version, about)]
pub struct Cli {
    /// Path to the .http file containing request definitions
    pub file: PathBuf,

    /// Hide response headers in the response view
    #[arg(long)]
    pub no_headers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_file_argument() {
        let cli = Cli::parse_from(["reqtui", "requests.http"]);
        assert_eq!(cli.file, PathBuf::from("requests.http"));
        assert!(!cli.no_headers);
    }

    #[test]
    fn test_no_headers_flag() {
        let cli = Cli::parse_from(["reqtui", "--no-headers", "api.http"]);
        assert!(cli.no_headers);
    }

    #[test]
    fn test_missing_file_argument_is_an_error() {
        assert!(Cli::try_parse_from(["reqtui"]).is_err());
    }
}
