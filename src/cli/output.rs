//! Output formatting for build results
//!
//! JSON and YAML serialize the result record as-is. Human output mirrors the
//! terminal summary panel: URLs, timing and counts on success, the failing
//! stage and error otherwise.

use anyhow::{Context, Result};

use crate::pipeline::{BuildFailure, BuildResult, BuildSummary};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, result: &BuildResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(result)
                .context("Failed to serialize build result to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(result).context("Failed to serialize build result to YAML")
            }
            OutputFormat::Human => Ok(match result {
                BuildResult::Success(summary) => self.format_success(summary),
                BuildResult::Failure(failure) => self.format_failure(failure),
            }),
        }
    }

    fn format_success(&self, summary: &BuildSummary) -> String {
        let mut output = String::new();

        output.push_str("\u{1F389} App Successfully Built!\n");
        output.push_str(RULE);
        output.push_str("\n\n");
        output.push_str(&format!("Live URL:      {}\n", summary.deployment_url));
        output.push_str(&format!("Source Code:   {}\n", summary.github_url));
        output.push_str(&format!("App Directory: {}\n", summary.app_dir.display()));
        output.push_str(&format!("Total Time:    {:.1}s\n", summary.elapsed_time));
        output.push_str(&format!("Files Created: {}\n", summary.files_created));
        output.push_str(&format!(
            "Tests Passed:  {}/{}\n",
            summary.tests_passed, summary.tests_total
        ));

        output
    }

    fn format_failure(&self, failure: &BuildFailure) -> String {
        let mut output = format!(
            "\u{274C} Error during {}: {}\n",
            failure.failed_at, failure.error
        );
        if let Some(help) = &failure.help {
            output.push_str(&format!("   {}\n", help));
        }
        output
    }
}
