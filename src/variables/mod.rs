//! Variable resolution for request documents.
//!
//! Declared `@name = value` variables and environment values are merged into
//! a single read-only [`VariableTable`] when a document is loaded; request
//! fields are substituted against it just before dispatch, and the
//! used-variable extractor reports which names a request references for
//! display purposes.

pub mod resolver;
pub mod substitution;
pub mod usage;

pub use resolver::{VariableKey, VariableTable};
pub use substitution::substitute;
pub use usage::used_variables;
