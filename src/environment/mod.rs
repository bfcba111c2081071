//! Environment value loading.
//!
//! The resolver's environment layer merges two sources: the process
//! environment and an optional `.env` file sitting next to the request
//! document. File values win over process values for the same name. A
//! missing `.env` file simply means the file layer is absent; an unreadable
//! one is an error, surfaced to the caller.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when a `.env` file exists but cannot be read.
#[derive(Debug)]
pub struct EnvFileError {
    /// Path of the offending file.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}

impl fmt::Display for EnvFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to read env file {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for EnvFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Snapshots the process environment into a name to value map.
pub fn process_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Parses a `.env` file into a name to value map.
///
/// Accepts `KEY=VALUE` lines; blank lines and `#` comments are skipped,
/// matching surrounding single or double quotes are stripped from values,
/// and lines without `=` are skipped with a warning.
///
/// # Arguments
///
/// * `path` - Path to the env file
///
/// # Returns
///
/// The parsed map, or `EnvFileError` if the file could not be read.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    let content = fs::read_to_string(path).map_err(|source| EnvFileError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut values = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim().to_string();
            let value = line[eq_pos + 1..].trim();

            let value = if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
                || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
            {
                &value[1..value.len() - 1]
            } else {
                value
            };

            values.insert(key, value.to_string());
        } else {
            tracing::warn!(
                line = line_num + 1,
                file = %path.display(),
                "skipping malformed env file line"
            );
        }
    }

    Ok(values)
}

/// Loads the full environment layer for a document in `document_dir`.
///
/// Starts from the process environment, then overlays `<document_dir>/.env`
/// when that file exists. The overlay wins on name collisions.
///
/// # Arguments
///
/// * `document_dir` - Directory containing the request document
///
/// # Returns
///
/// The merged map, or `EnvFileError` if an existing `.env` file is
/// unreadable.
pub fn load_environment(document_dir: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    let mut values = process_env();

    let env_path = document_dir.join(".env");
    if env_path.exists() {
        let file_values = load_env_file(&env_path)?;
        tracing::debug!(
            entries = file_values.len(),
            file = %env_path.display(),
            "loaded env file"
        );
        values.extend(file_values);
    }

    Ok(values)
}
