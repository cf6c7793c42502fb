//! Presentation layer for skillpath
//!
//! This crate contains CLI definitions, the HTTP boundary handlers, output
//! formatters and progress reporters.

pub mod api;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use api::{ApiEndpoint, ApiHandlers, ApiResponse};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
