//! Variable table construction.
//!
//! Merges in-document declarations and environment values into one lookup
//! table. The two namespaces are kept apart by a tagged key type, so a
//! declared variable named `HOME` and the environment value `HOME` coexist
//! without collision or prefix conventions.

use crate::models::VariableDeclaration;
use crate::variables::substitution::substitute;
use std::collections::HashMap;

/// A key into the resolved variable table.
///
/// `Declared` names come from `@name = value` lines; `Environment` names
/// come from the process environment and `.env` file. Display code must
/// untag explicitly via [`VariableKey::name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKey {
    /// A variable declared in the document.
    Declared(String),

    /// A value sourced from the environment layer.
    Environment(String),
}

impl VariableKey {
    /// Returns the plain display name, without the namespace tag.
    pub fn name(&self) -> &str {
        match self {
            VariableKey::Declared(name) => name,
            VariableKey::Environment(name) => name,
        }
    }
}

/// The resolved variable table for one loaded document.
///
/// Built exactly once per document load and read-only afterwards: every
/// entry holds a final string value, never a partially-resolved one.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: HashMap<VariableKey, String>,
}

impl VariableTable {
    /// Builds the table from ordered declarations and an environment map.
    ///
    /// The environment entries are seeded first. Declarations are then
    /// resolved in document order, each one substituted against the table as
    /// built so far: a declaration can reference any environment value and
    /// any earlier declaration, never a later one or itself. References that
    /// do not resolve stay in the stored value as literal placeholder text.
    ///
    /// # Arguments
    ///
    /// * `declarations` - Document declarations in file order
    /// * `environment` - Name to value map from the environment layer
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtui::models::VariableDeclaration;
    /// use reqtui::variables::VariableTable;
    /// use std::collections::HashMap;
    ///
    /// let declarations = vec![
    ///     VariableDeclaration { name: "x".into(), value: "1".into(), line: 1 },
    ///     VariableDeclaration { name: "y".into(), value: "{{x}}2".into(), line: 2 },
    /// ];
    /// let table = VariableTable::build(&declarations, &HashMap::new());
    /// assert_eq!(table.get_declared("y"), Some("12"));
    /// ```
    pub fn build(
        declarations: &[VariableDeclaration],
        environment: &HashMap<String, String>,
    ) -> Self {
        let mut table = VariableTable {
            entries: HashMap::with_capacity(declarations.len() + environment.len()),
        };

        for (name, value) in environment {
            table
                .entries
                .insert(VariableKey::Environment(name.clone()), value.clone());
        }

        for declaration in declarations {
            let resolved = substitute(&declaration.value, &table);
            table
                .entries
                .insert(VariableKey::Declared(declaration.name.clone()), resolved);
        }

        tracing::debug!(
            declared = declarations.len(),
            environment = environment.len(),
            "built variable table"
        );

        table
    }

    /// Looks up a value by tagged key.
    pub fn get(&self, key: &VariableKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up a declared variable by name.
    pub fn get_declared(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&VariableKey::Declared(name.to_string()))
            .map(String::as_str)
    }

    /// Looks up an environment value by name.
    pub fn get_environment(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&VariableKey::Environment(name.to_string()))
            .map(String::as_str)
    }

    /// Number of entries across both namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
