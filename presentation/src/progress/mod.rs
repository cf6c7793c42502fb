//! Progress reporting for pipeline execution

pub mod reporter;
