//! Identifier → script table built by one population pass.

use scriptdeploy_api::{SourceError, SourceResult};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A loaded script. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub identifier: String,
    pub content: String,
    /// Name of the module the script was loaded from
    pub module: String,
}

#[derive(Debug, Default)]
pub struct ScriptCache {
    scripts: HashMap<String, ScriptEntry>,
}

impl ScriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a script; an identifier already present is an error, never an overwrite
    pub fn insert(&mut self, entry: ScriptEntry) -> SourceResult<()> {
        match self.scripts.entry(entry.identifier.clone()) {
            Entry::Occupied(existing) => Err(SourceError::DuplicateScriptIdentifier {
                identifier: entry.identifier,
                first_module: existing.get().module.clone(),
                second_module: entry.module,
            }),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&ScriptEntry> {
        self.scripts.get(identifier)
    }

    pub fn content(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(|entry| entry.content.as_str())
    }

    /// Identifiers in sorted order
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.scripts.keys().cloned().collect();
        identifiers.sort();
        identifiers
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, module: &str) -> ScriptEntry {
        ScriptEntry {
            identifier: identifier.to_string(),
            content: format!("-- {} from {}", identifier, module),
            module: module.to_string(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut cache = ScriptCache::new();
        cache.insert(entry("002.sql", "a")).unwrap();
        cache.insert(entry("001.sql", "b")).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.content("001.sql"), Some("-- 001.sql from b"));
        assert_eq!(cache.get("002.sql").unwrap().module, "a");
        assert!(cache.content("003.sql").is_none());
        assert_eq!(cache.identifiers(), vec!["001.sql", "002.sql"]);
    }

    #[test]
    fn test_duplicate_keeps_first_and_reports_both_modules() {
        let mut cache = ScriptCache::new();
        cache.insert(entry("x.sql", "first")).unwrap();

        let err = cache.insert(entry("x.sql", "second")).unwrap_err();
        match err {
            SourceError::DuplicateScriptIdentifier {
                identifier,
                first_module,
                second_module,
            } => {
                assert_eq!(identifier, "x.sql");
                assert_eq!(first_module, "first");
                assert_eq!(second_module, "second");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cache.content("x.sql"), Some("-- x.sql from first"));
    }
}
