//! Infrastructure layer for skillpath
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod completion;
pub mod config;
pub mod logging;
pub mod search;

// Re-export commonly used types
pub use completion::OpenAiCompletion;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCompletionConfig, FileConfig, FileLoggingConfig,
    FilePipelineConfig, FileSearchConfig,
};
pub use logging::JsonlExchangeLogger;
pub use search::DuckDuckGoSearch;
