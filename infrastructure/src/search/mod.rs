//! Search backend adapters
//!
//! Implements the [`SearchProvider`](skillpath_application::SearchProvider)
//! port against DuckDuckGo's HTML results page.

mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearch;
