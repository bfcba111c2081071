//! reqtui binary entry point.
//!
//! Loads the document, builds the variable table, and hands both to the UI.
//! Everything user-facing before the alternate screen opens goes through
//! anyhow so failures print as one descriptive line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use reqtui::config::Cli;
use reqtui::environment;
use reqtui::parser::parse_document;
use reqtui::ui::{self, App};
use reqtui::variables::VariableTable;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let file_appender = tracing_appender::rolling::never(".", "reqtui.log");
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if !cli.file.exists() {
        bail!("file not found: {}", cli.file.display());
    }

    let file = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let document = parse_document(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    if document.requests.is_empty() {
        bail!("no HTTP requests found in {}", cli.file.display());
    }

    let document_dir = cli.file.parent().unwrap_or_else(|| Path::new("."));
    let env_values = environment::load_environment(document_dir)
        .context("failed to load environment layer")?;
    let variables = VariableTable::build(&document.variables, &env_values);

    let app = App::new(document, variables, !cli.no_headers);
    ui::run(app).await
}
