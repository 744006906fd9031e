/// Error type carried across the module boundary
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Resource '{resource}' was enumerated by module '{module}' but could not be opened")]
    ResourceMissing { module: String, resource: String },
    #[error(
        "Duplicate script identifier '{identifier}': provided by module '{first_module}' and module '{second_module}'"
    )]
    DuplicateScriptIdentifier {
        identifier: String,
        first_module: String,
        second_module: String,
    },
    #[error("Resource '{resource}' in module '{module}' is not valid {encoding}")]
    Decode {
        module: String,
        resource: String,
        encoding: &'static str,
    },
    #[error("Module '{module}' failed while reading '{resource}': {source}")]
    ModuleAccess {
        module: String,
        resource: String,
        #[source]
        source: BoxError,
    },
    #[error("Script loading was cancelled")]
    Cancelled,
}

impl SourceError {
    /// Whether a later lookup may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SourceError::Cancelled | SourceError::ModuleAccess { .. })
    }
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
