//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::Stage;

/// Events emitted while a build runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Build started
    BuildStarted { prompt: String },

    /// A stage began
    StageStarted { stage: Stage },

    /// A stage finished without a fault
    StageComplete { stage: Stage, duration: Duration },

    /// Plan decoded and accepted
    PlanReady {
        app_name: String,
        app_type: String,
        tech: String,
        features: usize,
        tasks: usize,
        estimated_minutes: f64,
    },

    /// Code generation wrote its files
    FilesGenerated { count: usize, app_dir: PathBuf },

    /// Test runner reported
    TestsComplete {
        passed: usize,
        failed: usize,
        total: usize,
    },

    /// Deployment returned its URLs
    Deployed { url: String, github_url: String },

    /// Build completed successfully
    Completed { total_time: Duration },

    /// Build failed; no later stage runs
    Failed { stage: Stage, error: String },
}

/// Trait for handling progress events during a build
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_progress(&ProgressEvent::BuildStarted {
            prompt: "Build a todo app".to_string(),
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::StageStarted {
            stage: Stage::Planning,
        });
        handler.on_progress(&ProgressEvent::StageComplete {
            stage: Stage::Planning,
            duration: Duration::from_millis(50),
        });
        handler.on_progress(&ProgressEvent::Completed {
            total_time: Duration::from_secs(5),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::TestsComplete {
            passed: 2,
            failed: 0,
            total: 2,
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("TestsComplete"));
        assert!(debug_str.contains("passed: 2"));
    }
}
