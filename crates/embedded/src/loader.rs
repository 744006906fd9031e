//! Resource loading: open a resource stream and decode it to text.

use encoding_rs::Encoding;
use scriptdeploy_api::{ResourceModule, SourceError, SourceResult};
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Read a resource to completion and decode it.
///
/// The stream is dropped before this returns, on every path. Cancellation
/// is observed before opening and while reading.
pub async fn load_resource(
    module: &dyn ResourceModule,
    resource: &str,
    encoding: &'static Encoding,
    cancel: &CancellationToken,
) -> SourceResult<String> {
    if cancel.is_cancelled() {
        return Err(SourceError::Cancelled);
    }

    let access_error = |source| SourceError::ModuleAccess {
        module: module.name().to_string(),
        resource: resource.to_string(),
        source,
    };

    let mut stream = module
        .open_resource(resource)
        .await
        .map_err(access_error)?
        .ok_or_else(|| SourceError::ResourceMissing {
            module: module.name().to_string(),
            resource: resource.to_string(),
        })?;

    let mut bytes = Vec::new();
    let read = tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        read = stream.read_to_end(&mut bytes) => Some(read),
    };
    drop(stream);

    match read {
        None => return Err(SourceError::Cancelled),
        Some(Err(e)) => return Err(access_error(e.into())),
        Some(Ok(len)) => trace!("Read {} bytes of {} from {}", len, resource, module.name()),
    }

    decode(&bytes, encoding).ok_or_else(|| SourceError::Decode {
        module: module.name().to_string(),
        resource: resource.to_string(),
        encoding: encoding.name(),
    })
}

/// Decode with BOM sniffing; a BOM overrides `encoding` and is stripped.
/// Malformed input yields `None` instead of replacement characters.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (text, _actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}
