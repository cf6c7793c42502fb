//! Career domain: jobs, skills and learning roadmaps.

pub mod entities;
pub mod listing;
pub mod query;
pub mod resource_link;

pub use entities::{
    CareerPlan, Importance, Job, RoadmapStep, SearchResult, Skill, UnknownImportance,
};
pub use listing::is_aggregate_listing;
pub use query::SearchQuery;
pub use resource_link::ResourceLinkTemplate;
