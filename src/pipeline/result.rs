use serde::Serialize;
use std::path::PathBuf;

use super::stage::Stage;
use crate::plan::Plan;

/// Everything a successful build produced
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub plan: Plan,
    pub app_dir: PathBuf,
    pub deployment_url: String,
    pub github_url: String,
    /// Wall-clock seconds from start to deployment
    pub elapsed_time: f64,
    pub files_created: usize,
    pub tests_passed: usize,
    pub tests_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildFailure {
    pub failed_at: Stage,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Outcome of one `build` call. Never an `Err`: faults end up here.
#[derive(Debug, Clone)]
pub enum BuildResult {
    Success(BuildSummary),
    Failure(BuildFailure),
}

impl BuildResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildResult::Success(_))
    }

    pub fn summary(&self) -> Option<&BuildSummary> {
        match self {
            BuildResult::Success(summary) => Some(summary),
            BuildResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&BuildFailure> {
        match self {
            BuildResult::Success(_) => None,
            BuildResult::Failure(failure) => Some(failure),
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    inner: &'a T,
}

impl Serialize for BuildResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            BuildResult::Success(summary) => Tagged {
                success: true,
                inner: summary,
            }
            .serialize(serializer),
            BuildResult::Failure(failure) => Tagged {
                success: false,
                inner: failure,
            }
            .serialize(serializer),
        }
    }
}
