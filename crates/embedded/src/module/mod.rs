//! [`ResourceModule`](scriptdeploy_api::ResourceModule) implementations for the
//! ways a Rust binary embeds resources:
//! - [`StaticModule`] - a table of byte slices (`include_bytes!`, literals)
//! - [`EmbeddedFolder`] - a `#[derive(RustEmbed)]` folder
//! - [`ArchiveModule`] - a zip/jar archive held in memory

pub mod archive;
pub mod folder;
pub mod static_table;

pub use archive::ArchiveModule;
pub use folder::EmbeddedFolder;
pub use static_table::StaticModule;
