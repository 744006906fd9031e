use crate::error::SourceResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A place the deployment pipeline can fetch script text from.
#[async_trait]
pub trait ScriptSource: Send + Sync {
    /// Look up the content of a script by its identifier.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the source knows the script
    /// * `Ok(None)` - the source does not know it; the caller may try another source
    /// * `Err(_)` - the source could not be loaded
    async fn get_script_content(
        &self,
        script: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Option<String>>;
}

#[async_trait]
impl<T: ScriptSource + ?Sized> ScriptSource for Arc<T> {
    async fn get_script_content(
        &self,
        script: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Option<String>> {
        (**self).get_script_content(script, cancel).await
    }
}

#[async_trait]
impl<T: ScriptSource + ?Sized> ScriptSource for Box<T> {
    async fn get_script_content(
        &self,
        script: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Option<String>> {
        (**self).get_script_content(script, cancel).await
    }
}
