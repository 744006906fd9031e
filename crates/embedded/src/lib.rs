//! Deployment scripts served from resources embedded in compiled modules.
//!
//! ```text
//! ┌──────────────────────┐   ┌─────────────┐   ┌──────────────┐
//! │ ResourceModule[]     │──▶│ discover    │──▶│ load_resource│
//! │ (static, rust-embed, │   │ (filter)    │   │ (decode)     │
//! │  zip archive)        │   └─────────────┘   └──────┬───────┘
//! └──────────────────────┘                            ▼
//!                               ┌───────────────────────────────┐
//!   get_script_content ───────▶ │ EmbeddedSource (ScriptCache)  │
//!                               │ populated once, on first use  │
//!                               └───────────────────────────────┘
//! ```

pub mod cache;
pub mod config;
pub mod discovery;
pub mod filter;
pub mod loader;
pub mod module;
pub mod options;
pub mod source;

pub use cache::{ScriptCache, ScriptEntry};
pub use config::EmbeddedSourceConfig;
pub use filter::ScriptFilter;
pub use module::{ArchiveModule, EmbeddedFolder, StaticModule};
pub use options::EmbeddedSourceOptions;
pub use source::{EmbeddedSource, PopulationState};

pub use encoding_rs::Encoding;
pub use scriptdeploy_api::{
    ResourceModule, ResourceStream, ScriptSource, SourceError, SourceResult,
};
