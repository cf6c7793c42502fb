//! Configuration file loading for skillpath
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `SKILLPATH_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./skillpath.toml` or `./.skillpath.toml`
//! 4. Global: `~/.config/skillpath/config.toml` (platform config dir)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCompletionConfig, FileConfig, FileLoggingConfig,
    FilePipelineConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
