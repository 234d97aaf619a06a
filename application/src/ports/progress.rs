//! Progress notification port
//!
//! Defines the interface for reporting progress while a dispatch runs.

/// Callback for progress updates during research execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a dispatch step starts (e.g. "research", "technical_researcher")
    fn on_step_start(&self, label: &str);

    /// Called when a dispatch step finishes
    fn on_step_complete(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _label: &str) {}
    fn on_step_complete(&self, _label: &str, _success: bool) {}
}
