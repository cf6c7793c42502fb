//! Deterministic resource links for roadmap steps.
//!
//! A link is a navigable search URL, not a live call: the query is always
//! `free online resources for {step} in {skill}`, form-encoded into the `q`
//! parameter of the configured search page.

use url::Url;
use url::form_urlencoded::byte_serialize;

/// Default search page the links point at
pub const DEFAULT_LINK_BASE: &str = "https://duckduckgo.com/";

/// Formats roadmap resource links against a search page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLinkTemplate {
    base: String,
}

impl Default for ResourceLinkTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_BASE)
    }
}

impl ResourceLinkTemplate {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The plain-text query a link for this step encodes.
    pub fn query_for(step_name: &str, skill_name: &str) -> String {
        format!(
            "free online resources for {} in {}",
            step_name.trim(),
            skill_name.trim()
        )
    }

    /// Build the link for a step of a skill's roadmap.
    pub fn link_for(&self, step_name: &str, skill_name: &str) -> String {
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}q={}",
            self.base,
            separator,
            byte_serialize(Self::query_for(step_name, skill_name).as_bytes()).collect::<String>()
        )
    }

    /// Recover the decoded `q` parameter from a link, if it has one.
    pub fn query_of(link: &str) -> Option<String> {
        query_param(link, "q")
    }
}

/// Decoded value of the first `name` query parameter of an absolute URL.
pub fn query_param(link: &str, name: &str) -> Option<String> {
    Url::parse(link.trim())
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
