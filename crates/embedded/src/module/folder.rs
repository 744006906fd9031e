use async_trait::async_trait;
use rust_embed::RustEmbed;
use scriptdeploy_api::{BoxError, ResourceModule, ResourceStream};
use std::io::Cursor;
use std::marker::PhantomData;

/// Module over a folder embedded with `#[derive(RustEmbed)]`.
///
/// Identifiers are the folder-relative paths rust-embed reports,
/// using `/` as separator.
pub struct EmbeddedFolder<E> {
    name: String,
    _embed: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedFolder<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _embed: PhantomData,
        }
    }
}

#[async_trait]
impl<E: RustEmbed + 'static> ResourceModule for EmbeddedFolder<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_names(&self) -> Box<dyn Iterator<Item = String> + Send + '_> {
        let names: Vec<String> = E::iter().map(|name| name.into_owned()).collect();
        Box::new(names.into_iter())
    }

    async fn open_resource(&self, name: &str) -> Result<Option<ResourceStream>, BoxError> {
        Ok(E::get(name).map(|file| Box::new(Cursor::new(file.data)) as ResourceStream))
    }
}
