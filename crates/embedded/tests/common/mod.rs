#![allow(dead_code)]

use async_trait::async_trait;
use scriptdeploy_api::{BoxError, ResourceModule, ResourceStream};
use scriptdeploy_embedded::StaticModule;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Module double that counts enumerations and opens
pub struct CountingModule {
    inner: StaticModule,
    /// Identifiers enumerated but never openable
    phantom: Vec<String>,
    /// Identifiers whose open fails with an I/O error
    failing: Vec<String>,
    open_delay: Option<Duration>,
    cancel_on_open: Option<CancellationToken>,
    enumerations: AtomicUsize,
    opens: AtomicUsize,
}

impl CountingModule {
    pub fn new(name: &str, resources: &[(&str, &[u8])]) -> Self {
        let inner = resources.iter().fold(StaticModule::new(name), |m, (r, b)| {
            m.with_resource(*r, b.to_vec())
        });
        Self {
            inner,
            phantom: Vec::new(),
            failing: Vec::new(),
            open_delay: None,
            cancel_on_open: None,
            enumerations: AtomicUsize::new(0),
            opens: AtomicUsize::new(0),
        }
    }

    pub fn with_phantom(mut self, resource: &str) -> Self {
        self.phantom.push(resource.to_string());
        self
    }

    pub fn with_failing(mut self, resource: &str) -> Self {
        self.failing.push(resource.to_string());
        self
    }

    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = Some(delay);
        self
    }

    /// Cancel `token` whenever a resource of this module is opened
    pub fn cancelling_on_open(mut self, token: CancellationToken) -> Self {
        self.cancel_on_open = Some(token);
        self
    }

    pub fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl ResourceModule for CountingModule {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn resource_names(&self) -> Box<dyn Iterator<Item = String> + Send + '_> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        Box::new(
            self.inner
                .resource_names()
                .chain(self.phantom.iter().cloned())
                .chain(self.failing.iter().cloned()),
        )
    }

    async fn open_resource(&self, name: &str) -> Result<Option<ResourceStream>, BoxError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.open_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(token) = &self.cancel_on_open {
            token.cancel();
        }
        if self.failing.iter().any(|f| f == name) {
            return Err(Box::new(std::io::Error::other("resource table corrupted")));
        }
        self.inner.open_resource(name).await
    }
}
