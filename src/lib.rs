//! reqtui - terminal UI for running HTTP requests from `.http` files.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Core data structures for parsed documents, request
//!   definitions, and execution results
//! - **parser**: Parses request documents into structured definitions with a
//!   single-pass line classifier
//! - **variables**: Variable table construction, placeholder substitution,
//!   and used-variable extraction
//! - **environment**: Process environment and `.env` file loading
//! - **executor**: Dispatches requests using reqwest
//! - **formatter**: Streaming JSON re-indentation and display helpers
//! - **config**: Command-line interface
//! - **ui**: ratatui front end (list, loading, response, and error views)
//!
//! # Document format
//!
//! ```http
//! @host = https://api.example.com
//!
//! ### Create a user
//! POST {{host}}/users
//! Content-Type: application/json
//!
//! {"name": "Ada"}
//! ```
//!
//! Variables declared with `@name = value` resolve against earlier
//! declarations and the environment layer; `{{$dotenv NAME}}` reaches the
//! environment layer directly. Requests are separated by `###` markers, and
//! a comment directly above a request becomes its description in the list.

pub mod config;
pub mod environment;
pub mod executor;
pub mod formatter;
pub mod models;
pub mod parser;
pub mod ui;
pub mod variables;

pub use models::{ExecutionResult, HttpMethod, HttpResponse, ParsedDocument, RequestDefinition};
pub use parser::{parse_document, parse_str};
pub use variables::{substitute, used_variables, VariableTable};
