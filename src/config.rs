//! Generator configuration, read from `.localizable-sheets.json`.
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    ColumnsConfig,
    ConfigError,
    GeneratorSettings,
    LoggingConfig,
    SourceConfig,
    ValidationError,
};
