//! Script source serving scripts embedded in compiled modules.

use crate::cache::{ScriptCache, ScriptEntry};
use crate::discovery::discover;
use crate::loader::load_resource;
use crate::options::EmbeddedSourceOptions;
use async_trait::async_trait;
use scriptdeploy_api::{ScriptSource, SourceError, SourceResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Population progress of an [`EmbeddedSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    /// Nothing loaded yet, or the last pass failed or was cancelled
    Empty,
    /// A pass is in flight
    Populating,
    /// A full pass completed; the cache is final
    Populated,
}

/// [`ScriptSource`] over resources embedded in a set of modules.
///
/// All matching resources are loaded on the first lookup and kept for the
/// lifetime of the source. Only one population pass runs at a time;
/// concurrent lookups wait for it. A pass is committed only if it completes:
/// after an error or cancellation nothing is cached and the next lookup
/// starts over.
pub struct EmbeddedSource {
    options: EmbeddedSourceOptions,
    cache: OnceCell<ScriptCache>,
    /// Passes in flight; a cancelled pass may still be unwinding when the next starts
    populating: AtomicUsize,
}

impl EmbeddedSource {
    pub fn new(options: EmbeddedSourceOptions) -> Self {
        Self {
            options,
            cache: OnceCell::new(),
            populating: AtomicUsize::new(0),
        }
    }

    pub fn options(&self) -> &EmbeddedSourceOptions {
        &self.options
    }

    pub fn state(&self) -> PopulationState {
        if self.cache.initialized() {
            PopulationState::Populated
        } else if self.populating.load(Ordering::Acquire) > 0 {
            PopulationState::Populating
        } else {
            PopulationState::Empty
        }
    }

    /// Populate eagerly. Returns the number of cached scripts.
    pub async fn preload(&self, cancel: &CancellationToken) -> SourceResult<usize> {
        Ok(self.scripts(cancel).await?.len())
    }

    /// Identifiers of all cached scripts, sorted; empty until populated
    pub fn script_names(&self) -> Vec<String> {
        self.cache
            .get()
            .map(ScriptCache::identifiers)
            .unwrap_or_default()
    }

    /// Cached entry for a script, populating first if needed
    pub async fn get_script(
        &self,
        script: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Option<&ScriptEntry>> {
        Ok(self.scripts(cancel).await?.get(script))
    }

    async fn scripts(&self, cancel: &CancellationToken) -> SourceResult<&ScriptCache> {
        if let Some(cache) = self.cache.get() {
            return Ok(cache);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SourceError::Cancelled),
            cache = self.cache.get_or_try_init(|| self.populate(cancel)) => cache,
        }
    }

    async fn populate(&self, cancel: &CancellationToken) -> SourceResult<ScriptCache> {
        let _guard = PopulatingGuard::enter(&self.populating);
        let start = Instant::now();

        match self.load_all(cancel).await {
            Ok(cache) => {
                info!(
                    "Loaded {} script(s) from {} module(s) in {:?}",
                    cache.len(),
                    self.options.modules().len(),
                    start.elapsed()
                );
                Ok(cache)
            }
            Err(e) => {
                warn!("Script population aborted, nothing cached: {}", e);
                Err(e)
            }
        }
    }

    async fn load_all(&self, cancel: &CancellationToken) -> SourceResult<ScriptCache> {
        let discovered = discover(self.options.modules(), &self.options.filter());
        let encoding = self.options.encoding();
        let mut cache = ScriptCache::new();

        for module_resources in &discovered {
            if cancel.is_cancelled() {
                return Err(SourceError::Cancelled);
            }

            let module = module_resources.module.as_ref();
            debug!(
                "Found {} resource(s) in {}",
                module_resources.resources.len(),
                module.name()
            );

            let module_start = Instant::now();
            for resource in &module_resources.resources {
                let content = load_resource(module, resource, encoding, cancel).await?;
                cache.insert(ScriptEntry {
                    identifier: resource.clone(),
                    content,
                    module: module.name().to_string(),
                })?;
            }
            debug!("Module {} loaded in {:?}", module.name(), module_start.elapsed());
        }

        Ok(cache)
    }
}

#[async_trait]
impl ScriptSource for EmbeddedSource {
    async fn get_script_content(
        &self,
        script: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Option<String>> {
        let scripts = self.scripts(cancel).await?;
        Ok(scripts.content(script).map(str::to_owned))
    }
}

impl std::fmt::Debug for EmbeddedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedSource")
            .field("options", &self.options)
            .field("state", &self.state())
            .finish()
    }
}

/// Counts a pass as in flight until dropped
struct PopulatingGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> PopulatingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::AcqRel);
        Self { in_flight }
    }
}

impl Drop for PopulatingGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}
