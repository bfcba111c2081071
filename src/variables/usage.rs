//! Used-variable extraction.
//!
//! Reports which placeholders a request actually references, for display
//! next to the response. Purely informational: this never feeds back into
//! substitution or dispatch.

use crate::models::RequestDefinition;
use crate::variables::resolver::VariableTable;
use crate::variables::substitution::{placeholder_key, PLACEHOLDER};
use std::collections::BTreeMap;

/// Collects the variables referenced by a request that resolve in `table`.
///
/// Scans the URL, every header value, and the body for both placeholder
/// forms. Names are reported in plain display form (namespace tag
/// stripped) with their resolved values; duplicate references collapse to
/// one entry, and the map ordering is deterministic.
///
/// # Arguments
///
/// * `request` - The request definition to scan
/// * `table` - The resolved variable table
///
/// # Returns
///
/// Display name to resolved value, sorted by name.
pub fn used_variables(
    request: &RequestDefinition,
    table: &VariableTable,
) -> BTreeMap<String, String> {
    let mut used = BTreeMap::new();

    scan_into(&request.url, table, &mut used);
    for value in request.headers.values() {
        scan_into(value, table, &mut used);
    }
    scan_into(&request.body, table, &mut used);

    used
}

/// Adds every resolvable placeholder in `text` to `used`.
fn scan_into(text: &str, table: &VariableTable, used: &mut BTreeMap<String, String>) {
    for caps in PLACEHOLDER.captures_iter(text) {
        let key = placeholder_key(&caps);
        if let Some(value) = table.get(&key) {
            used.insert(key.name().to_string(), value.to_string());
        }
    }
}
