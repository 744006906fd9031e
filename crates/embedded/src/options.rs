//! Options describing where embedded scripts come from and how to read them.

use crate::filter::ScriptFilter;
use encoding_rs::Encoding;
use scriptdeploy_api::{ResourceModule, SourceError, SourceResult};
use std::fmt;
use std::sync::Arc;

/// Configuration of an [`EmbeddedSource`](crate::EmbeddedSource).
///
/// Unset fields fall back to their defaults when read: no modules, a filter
/// accepting every resource, and UTF-8. Byte-order marks always take
/// precedence over the configured encoding.
#[derive(Clone, Default)]
pub struct EmbeddedSourceOptions {
    modules: Vec<Arc<dyn ResourceModule>>,
    filter: Option<ScriptFilter>,
    encoding: Option<&'static Encoding>,
}

impl EmbeddedSourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module to scan
    pub fn with_module(mut self, module: Arc<dyn ResourceModule>) -> Self {
        self.modules.push(module);
        self
    }

    /// Add multiple modules, keeping their order
    pub fn with_modules(
        mut self,
        modules: impl IntoIterator<Item = Arc<dyn ResourceModule>>,
    ) -> Self {
        self.modules.extend(modules);
        self
    }

    pub fn with_filter(mut self, filter: ScriptFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the encoding from a WHATWG label such as `"utf-8"` or `"windows-1252"`
    pub fn with_encoding_label(self, label: &str) -> SourceResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            SourceError::Configuration(format!("unknown text encoding '{}'", label))
        })?;
        Ok(self.with_encoding(encoding))
    }

    pub fn modules(&self) -> &[Arc<dyn ResourceModule>] {
        &self.modules
    }

    pub fn filter(&self) -> ScriptFilter {
        self.filter.clone().unwrap_or_default()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding.unwrap_or(encoding_rs::UTF_8)
    }
}

impl fmt::Debug for EmbeddedSourceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedSourceOptions")
            .field(
                "modules",
                &self.modules.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field("filter", &self.filter)
            .field("encoding", &self.encoding().name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::StaticModule;

    #[test]
    fn test_defaults() {
        let options = EmbeddedSourceOptions::new();
        assert!(options.modules().is_empty());
        assert!(options.filter().matches("anything.txt"));
        assert_eq!(options.encoding(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_modules_keep_order() {
        let options = EmbeddedSourceOptions::new()
            .with_module(Arc::new(StaticModule::new("first")))
            .with_modules([
                Arc::new(StaticModule::new("second")) as Arc<dyn ResourceModule>,
                Arc::new(StaticModule::new("third")) as Arc<dyn ResourceModule>,
            ]);

        let names: Vec<&str> = options.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_encoding_label() {
        let options = EmbeddedSourceOptions::new()
            .with_encoding_label("latin1")
            .unwrap();
        assert_eq!(options.encoding(), encoding_rs::WINDOWS_1252);

        let err = EmbeddedSourceOptions::new()
            .with_encoding_label("klingon")
            .unwrap_err();
        assert!(matches!(err, SourceError::Configuration(_)));
    }
}
