//! Contract for compiled units that embed named resources.

use crate::error::BoxError;
use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Readable byte stream over one embedded resource.
/// Dropping the stream releases it.
pub type ResourceStream = Box<dyn AsyncRead + Send + Unpin>;

/// A compiled module exposing embedded resources by identifier.
///
/// Identifiers are unique within one module and stable across runs.
/// Implementations are owned by the caller and never mutated by sources.
#[async_trait]
pub trait ResourceModule: Send + Sync {
    /// Module name (for logging and error reports)
    fn name(&self) -> &str;

    /// All resource identifiers this module embeds
    fn resource_names(&self) -> Box<dyn Iterator<Item = String> + Send + '_>;

    /// Open a resource as a byte stream.
    ///
    /// Returns `Ok(None)` when the module has no resource under `name`.
    async fn open_resource(&self, name: &str) -> Result<Option<ResourceStream>, BoxError>;
}
