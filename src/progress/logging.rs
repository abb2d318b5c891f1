//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::BuildStarted { prompt } => {
                info!(prompt = %prompt, "Starting build");
            }
            ProgressEvent::StageStarted { stage } => {
                info!(stage = %stage, "Starting stage");
            }
            ProgressEvent::StageComplete { stage, duration } => {
                info!(
                    stage = %stage,
                    duration_ms = duration.as_millis(),
                    "Stage complete"
                );
            }
            ProgressEvent::PlanReady {
                app_name,
                app_type,
                tech,
                features,
                tasks,
                estimated_minutes,
            } => {
                info!(
                    app = %app_name,
                    app_type = %app_type,
                    tech = %tech,
                    features,
                    tasks,
                    estimated_minutes,
                    "Plan ready"
                );
            }
            ProgressEvent::FilesGenerated { count, app_dir } => {
                info!(files = count, dir = %app_dir.display(), "Files generated");
            }
            ProgressEvent::TestsComplete {
                passed,
                failed,
                total,
            } => {
                if *failed > 0 {
                    warn!(passed, failed, total, "Tests complete with failures");
                } else {
                    info!(passed, total, "Tests complete");
                }
            }
            ProgressEvent::Deployed { url, github_url } => {
                info!(url = %url, github = %github_url, "Deployed");
            }
            ProgressEvent::Completed { total_time } => {
                info!(total_time_ms = total_time.as_millis(), "Build complete");
            }
            ProgressEvent::Failed { stage, error } => {
                warn!(stage = %stage, error = %error, "Build failed");
            }
        }
        debug!(?event, "Progress event handled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        let events = vec![
            ProgressEvent::BuildStarted {
                prompt: "Build a todo app".to_string(),
            },
            ProgressEvent::StageStarted {
                stage: Stage::Planning,
            },
            ProgressEvent::StageComplete {
                stage: Stage::Planning,
                duration: Duration::from_millis(50),
            },
            ProgressEvent::PlanReady {
                app_name: "todo".to_string(),
                app_type: "web_app".to_string(),
                tech: "react + none".to_string(),
                features: 3,
                tasks: 2,
                estimated_minutes: 5.0,
            },
            ProgressEvent::FilesGenerated {
                count: 4,
                app_dir: PathBuf::from("generated_apps/todo"),
            },
            ProgressEvent::TestsComplete {
                passed: 3,
                failed: 1,
                total: 4,
            },
            ProgressEvent::TestsComplete {
                passed: 4,
                failed: 0,
                total: 4,
            },
            ProgressEvent::Deployed {
                url: "https://todo.example".to_string(),
                github_url: "https://github.com/x/todo".to_string(),
            },
            ProgressEvent::Completed {
                total_time: Duration::from_secs(5),
            },
            ProgressEvent::Failed {
                stage: Stage::Testing,
                error: "Test error".to_string(),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
