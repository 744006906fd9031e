//! Resource name predicates.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding which resource identifiers are scripts.
///
/// Filters must be pure: the same identifier always yields the same answer.
#[derive(Clone)]
pub struct ScriptFilter {
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl ScriptFilter {
    pub fn new(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    /// Accept identifiers ending with `.{extension}` (leading dot optional)
    pub fn extension(extension: &str) -> Self {
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        Self::new(move |name| name.ends_with(&suffix))
    }

    /// Accept identifiers the pattern matches anywhere
    pub fn regex(pattern: Regex) -> Self {
        Self::new(move |name| pattern.is_match(name))
    }

    pub fn and(self, other: ScriptFilter) -> Self {
        Self::new(move |name| self.matches(name) && other.matches(name))
    }

    pub fn or(self, other: ScriptFilter) -> Self {
        Self::new(move |name| self.matches(name) || other.matches(name))
    }

    pub fn not(self) -> Self {
        Self::new(move |name| !self.matches(name))
    }

    pub fn matches(&self, name: &str) -> bool {
        (self.predicate)(name)
    }
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl fmt::Debug for ScriptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFilter").finish_non_exhaustive()
    }
}
