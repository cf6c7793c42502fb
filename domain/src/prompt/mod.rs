//! Prompt domain
//!
//! System instructions and user content for every completion call the
//! pipeline makes.

mod template;

pub use template::PromptTemplate;
