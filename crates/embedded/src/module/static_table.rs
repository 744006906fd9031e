use async_trait::async_trait;
use scriptdeploy_api::{BoxError, ResourceModule, ResourceStream};
use std::borrow::Cow;
use std::io::Cursor;

/// Module backed by a fixed table of resources compiled into the binary.
///
/// ```ignore
/// let module = StaticModule::new("migrations")
///     .with_resource("001_init.sql", include_bytes!("../sql/001_init.sql"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticModule {
    name: String,
    resources: Vec<(String, Cow<'static, [u8]>)>,
}

impl StaticModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// Build from a `(identifier, bytes)` table
    pub fn from_table(name: impl Into<String>, table: &[(&str, &'static [u8])]) -> Self {
        table
            .iter()
            .fold(Self::new(name), |module, (resource, bytes)| {
                module.with_resource(*resource, *bytes)
            })
    }

    /// Add a resource; an existing resource with the same identifier is replaced
    pub fn with_resource(
        mut self,
        resource: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        let resource = resource.into();
        let bytes = bytes.into();
        match self.resources.iter_mut().find(|(name, _)| *name == resource) {
            Some((_, existing)) => *existing = bytes,
            None => self.resources.push((resource, bytes)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ResourceModule for StaticModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_names(&self) -> Box<dyn Iterator<Item = String> + Send + '_> {
        Box::new(self.resources.iter().map(|(name, _)| name.clone()))
    }

    async fn open_resource(&self, name: &str) -> Result<Option<ResourceStream>, BoxError> {
        Ok(self
            .resources
            .iter()
            .find(|(resource, _)| resource == name)
            .map(|(_, bytes)| Box::new(Cursor::new(bytes.clone())) as ResourceStream))
    }
}
