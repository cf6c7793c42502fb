//! Field-by-field validation of decoded model output.
//!
//! The normalizer only guarantees *some* JSON value. These functions check
//! field presence and types before any entity is constructed and report a
//! [`ShapeError`](crate::core::error::ShapeError) otherwise. Nothing here
//! truncates, pads or coerces.

mod fields;
pub mod jobs;
pub mod roadmap;
pub mod skills;

pub use jobs::{ExtractedJobs, validate_jobs};
pub use roadmap::{MAX_DESCRIPTION_WORDS, MAX_ROADMAP_STEPS, StepOutline, validate_roadmap};
pub use skills::{REFINED_SKILL_COUNT, SkillCountPolicy, validate_skills};
