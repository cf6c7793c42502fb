//! Progress notification port
//!
//! Defines the interface for reporting progress while the pipeline runs.

use skillpath_domain::Stage;

/// Callback for progress updates during pipeline execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console bars, plain lines, nothing).
pub trait PipelineProgress: Send + Sync {
    /// Called when a stage starts with the number of tasks it will run
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one task of a stage finishes
    fn on_task_complete(&self, stage: Stage, label: &str, success: bool);

    /// Called when a stage finishes
    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: Stage, _label: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
