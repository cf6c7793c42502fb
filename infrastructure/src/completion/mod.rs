//! Completion backend adapters
//!
//! Implements the [`CompletionProvider`](skillpath_application::CompletionProvider)
//! port against any OpenAI-compatible chat completions API (OpenAI, Azure
//! OpenAI, Ollama, vLLM, ...).

mod openai;

pub use openai::OpenAiCompletion;
