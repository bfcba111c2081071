//! Placeholder substitution engine.
//!
//! Replaces `{{name}}` and `{{$dotenv name}}` patterns in request text with
//! values from a [`VariableTable`]. Substitution is a single left-to-right
//! pass: a substituted value is never re-scanned, so there is no recursive
//! expansion and no cycle to detect. Placeholders that do not resolve are
//! left in the text unchanged.

use crate::variables::resolver::{VariableKey, VariableTable};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches both placeholder forms, whitespace around the name tolerated.
///
/// Capture 1 holds the name of a `{{$dotenv name}}` reference, capture 2 the
/// name of a plain `{{name}}` reference; exactly one of the two is present
/// per match.
pub(crate) static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(?:\$dotenv\s+(\w+)|(\w+))\s*\}\}").expect("placeholder regex")
});

/// Extracts the table key referenced by one placeholder match.
pub(crate) fn placeholder_key(caps: &Captures<'_>) -> VariableKey {
    if let Some(name) = caps.get(1) {
        VariableKey::Environment(name.as_str().to_string())
    } else {
        VariableKey::Declared(caps[2].to_string())
    }
}

/// Substitutes all resolvable placeholders in `text`.
///
/// # Arguments
///
/// * `text` - Input text, typically a request URL, header value, or body
/// * `table` - The resolved variable table to look names up in
///
/// # Returns
///
/// The text with every resolvable placeholder replaced; unresolvable
/// placeholders are kept verbatim.
///
/// # Examples
///
/// ```
/// use reqtui::variables::{substitute, VariableTable};
/// use reqtui::models::VariableDeclaration;
/// use std::collections::HashMap;
///
/// let declarations = vec![VariableDeclaration {
///     name: "host".to_string(),
///     value: "https://api.example.com".to_string(),
///     line: 1,
/// }];
/// let table = VariableTable::build(&declarations, &HashMap::new());
///
/// assert_eq!(
///     substitute("{{host}}/users/{{id}}", &table),
///     "https://api.example.com/users/{{id}}"
/// );
/// ```
pub fn substitute(text: &str, table: &VariableTable) -> String {
    // Fast path: nothing that could be a placeholder.
    if !text.contains("{{") {
        return text.to_string();
    }

    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            match table.get(&placeholder_key(caps)) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
