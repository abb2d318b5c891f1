//! Terminal progress handler
//!
//! Shows a spinner per stage when stdout is a terminal and plain status lines
//! otherwise. Only used for human output; machine formats keep stdout clean.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::{ProgressEvent, ProgressHandler};

const TICK: Duration = Duration::from_millis(100);

pub struct ConsoleHandler {
    interactive: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleHandler {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            spinner: Mutex::new(None),
        }
    }

    /// Spinner when stdout is a TTY, plain lines otherwise
    pub fn detect() -> Self {
        Self::new(atty::is(atty::Stream::Stdout))
    }

    fn start_spinner(&self, message: &str) {
        if !self.interactive {
            return;
        }
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK);

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }

    fn stop_spinner(&self, message: Option<String>) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(spinner) = slot.take() {
            match message {
                Some(message) => spinner.finish_with_message(message),
                None => spinner.finish_and_clear(),
            }
        }
    }
}

impl ProgressHandler for ConsoleHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::StageStarted { stage } => {
                println!("\nStep {}: {}", stage.number(), stage.title());
                self.start_spinner(stage.activity());
            }
            ProgressEvent::StageComplete { .. } => {
                self.stop_spinner(Some("✓ Done".to_string()));
            }
            ProgressEvent::Failed { .. } => {
                self.stop_spinner(None);
            }
            _ => {}
        }

        for line in describe(event) {
            println!("{}", line);
        }
    }
}

/// Status lines printed after an event, independent of the spinner.
pub fn describe(event: &ProgressEvent) -> Vec<String> {
    match event {
        ProgressEvent::PlanReady {
            app_name,
            app_type,
            tech,
            features,
            estimated_minutes,
            ..
        } => vec![
            format!("✓ Project: {}", app_name),
            format!("✓ Type: {}", app_type),
            format!("✓ Tech: {}", tech),
            format!("✓ Features: {}", features),
            format!("✓ Estimated time: {} minutes", estimated_minutes),
        ],
        ProgressEvent::FilesGenerated { count, app_dir } => {
            vec![format!("✓ Created {} files in {}", count, app_dir.display())]
        }
        ProgressEvent::TestsComplete {
            passed,
            failed,
            total,
        } => {
            if passed == total {
                vec![format!("✓ All tests passing ({}/{})", passed, total)]
            } else {
                vec![format!("⚠ {} tests failed ({}/{} passed)", failed, passed, total)]
            }
        }
        ProgressEvent::Deployed { url, .. } => vec![format!("✓ Deployed to {}", url)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;
    use std::path::PathBuf;

    #[test]
    fn test_describe_plan_ready() {
        let lines = describe(&ProgressEvent::PlanReady {
            app_name: "todo".to_string(),
            app_type: "web_app".to_string(),
            tech: "react + node".to_string(),
            features: 3,
            tasks: 2,
            estimated_minutes: 5.0,
        });
        assert_eq!(lines[0], "✓ Project: todo");
        assert_eq!(lines[2], "✓ Tech: react + node");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_describe_failed_tests() {
        let lines = describe(&ProgressEvent::TestsComplete {
            passed: 1,
            failed: 2,
            total: 3,
        });
        assert_eq!(lines, vec!["⚠ 2 tests failed (1/3 passed)".to_string()]);
    }

    #[test]
    fn test_describe_files() {
        let lines = describe(&ProgressEvent::FilesGenerated {
            count: 2,
            app_dir: PathBuf::from("out/demo"),
        });
        assert_eq!(lines, vec!["✓ Created 2 files in out/demo".to_string()]);
    }

    #[test]
    fn test_stage_events_have_no_status_lines() {
        assert!(describe(&ProgressEvent::StageStarted {
            stage: Stage::Testing
        })
        .is_empty());
    }

    #[test]
    fn test_non_interactive_handler_runs_without_spinner() {
        let handler = ConsoleHandler::new(false);
        handler.on_progress(&ProgressEvent::StageStarted {
            stage: Stage::Planning,
        });
        handler.on_progress(&ProgressEvent::StageComplete {
            stage: Stage::Planning,
            duration: Duration::from_millis(5),
        });
        assert!(handler.spinner.lock().unwrap().is_none());
    }
}
