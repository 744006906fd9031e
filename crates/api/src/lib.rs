pub mod error;
pub mod module;
pub mod source;

// Re-export commonly used types
pub use error::{BoxError, SourceError, SourceResult};
pub use module::{ResourceModule, ResourceStream};
pub use source::ScriptSource;
