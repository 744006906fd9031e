//! Declarative configuration that compiles into [`EmbeddedSourceOptions`].

use crate::filter::ScriptFilter;
use crate::options::EmbeddedSourceOptions;
use regex::Regex;
use scriptdeploy_api::{ResourceModule, SourceError, SourceResult};
use serde::Deserialize;
use std::sync::Arc;

/// Serializable description of an embedded source.
///
/// Modules cannot be described as data, so they are supplied when the
/// configuration is turned into options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddedSourceConfig {
    /// WHATWG encoding label; UTF-8 when absent
    pub encoding: Option<String>,
    /// Regex patterns; a resource must match at least one (all pass when empty)
    pub include: Vec<String>,
    /// Regex patterns; a resource matching any of them is skipped
    pub exclude: Vec<String>,
    /// Accepted file extensions (all pass when empty)
    pub extensions: Vec<String>,
}

impl EmbeddedSourceConfig {
    pub fn into_options(
        self,
        modules: impl IntoIterator<Item = Arc<dyn ResourceModule>>,
    ) -> SourceResult<EmbeddedSourceOptions> {
        let mut options = EmbeddedSourceOptions::new()
            .with_modules(modules)
            .with_filter(self.build_filter()?);

        if let Some(label) = &self.encoding {
            options = options.with_encoding_label(label)?;
        }

        Ok(options)
    }

    fn build_filter(&self) -> SourceResult<ScriptFilter> {
        let mut filter = ScriptFilter::accept_all();

        if let Some(extensions) = any_of(self.extensions.iter().map(|e| ScriptFilter::extension(e)))
        {
            filter = filter.and(extensions);
        }

        if let Some(include) = any_of(compile_all(&self.include)?) {
            filter = filter.and(include);
        }

        if let Some(exclude) = any_of(compile_all(&self.exclude)?) {
            filter = filter.and(exclude.not());
        }

        Ok(filter)
    }
}

fn compile_all(patterns: &[String]) -> SourceResult<Vec<ScriptFilter>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map(ScriptFilter::regex).map_err(|e| {
                SourceError::Configuration(format!("invalid filter pattern '{}': {}", pattern, e))
            })
        })
        .collect()
}

/// `None` for an empty set, otherwise the disjunction
fn any_of(filters: impl IntoIterator<Item = ScriptFilter>) -> Option<ScriptFilter> {
    filters.into_iter().reduce(ScriptFilter::or)
}
