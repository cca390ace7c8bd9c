//! Extensible metadata columns.
//!
//! Deployments may register extra catalog columns beyond the builtin table.
//! These are looked up only after the builtin catalog misses.

use std::collections::HashMap;

use super::FieldCode;

/// Bidirectional map between extensible column names and wire codes.
#[derive(Debug, Clone, Default)]
pub struct ExtensibleMetadataMap {
    // Keyed by upper-cased name; value keeps the name as registered.
    entries: HashMap<String, (String, FieldCode)>,
}

impl ExtensibleMetadataMap {
    /// Register a column. A later insert under the same name wins.
    fn insert(&mut self, name: impl Into<String>, code: impl Into<FieldCode>) {
        let name = name.into();
        self.entries
            .insert(name.to_ascii_uppercase(), (name, code.into()));
    }

    /// Look up a column code, ignoring ASCII case.
    pub fn code_for_name(&self, name: &str) -> Option<FieldCode> {
        self.entries
            .get(&name.to_ascii_uppercase())
            .map(|(_, code)| *code)
    }

    /// Reverse lookup: the registered name for a code.
    pub fn name_for_code(&self, code: FieldCode) -> Option<&str> {
        self.entries
            .values()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, C: Into<FieldCode>> FromIterator<(S, C)> for ExtensibleMetadataMap {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (name, code) in iter {
            map.insert(name, code);
        }
        map
    }
}
