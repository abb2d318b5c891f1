//! Seams between the orchestrator and the work it sequences
//!
//! Planning is the only stage with a typed error; the others are free to fail
//! with any `anyhow` error, which the orchestrator wraps with its stage.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::plan::Plan;
use crate::planning::PlanningError;

#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(&self, prompt: &str) -> Result<Plan, PlanningError>;
}

#[async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Materializes the plan under `app_dir`, returning the files written.
    async fn generate(&self, plan: &Plan, app_dir: &Path) -> Result<Vec<PathBuf>>;
}

#[async_trait]
pub trait TestRunner: Send + Sync {
    async fn run(&self, plan: &Plan, app_dir: &Path) -> Result<TestReport>;
}

#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, plan: &Plan, app_dir: &Path) -> Result<Deployment>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TestReport {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub url: String,
    pub github_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let report = TestReport {
            passed: 2,
            failed: 0,
            total: 2,
        };
        assert!(report.all_passed());

        let report = TestReport {
            passed: 1,
            failed: 1,
            total: 2,
        };
        assert!(!report.all_passed());
    }

    #[test]
    fn test_empty_report_counts_as_passing() {
        assert!(TestReport::default().all_passed());
    }
}
