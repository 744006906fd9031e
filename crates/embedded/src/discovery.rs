//! Resource discovery: which resources of which module are scripts.

use crate::filter::ScriptFilter;
use scriptdeploy_api::ResourceModule;
use std::sync::Arc;
use tracing::debug;

/// Identifiers of one module accepted by the filter
#[derive(Clone)]
pub struct ModuleResources {
    pub module: Arc<dyn ResourceModule>,
    pub resources: Vec<String>,
}

impl std::fmt::Debug for ModuleResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleResources")
            .field("module", &self.module.name())
            .field("resources", &self.resources)
            .finish()
    }
}

/// Enumerate every module and keep the identifiers the filter accepts.
///
/// One entry per module, in input order, including modules with no match.
pub fn discover(modules: &[Arc<dyn ResourceModule>], filter: &ScriptFilter) -> Vec<ModuleResources> {
    let discovered: Vec<ModuleResources> = modules
        .iter()
        .map(|module| ModuleResources {
            module: module.clone(),
            resources: module
                .resource_names()
                .filter(|name| filter.matches(name))
                .collect(),
        })
        .collect();

    debug!("Loaded resources from {} modules", discovered.len());

    discovered
}
