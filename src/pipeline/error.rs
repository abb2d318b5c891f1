use thiserror::Error;

use super::stage::Stage;
use crate::planning::PlanningError;

/// A stage fault, converted once at the orchestrator boundary
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0}")]
    Planning(#[from] PlanningError),

    /// Plan decoded but failed semantic validation
    #[error("Plan rejected: {0}")]
    InvalidPlan(String),

    #[error("Code generation failed: {0:#}")]
    Generation(anyhow::Error),

    #[error("Testing failed: {0:#}")]
    Testing(anyhow::Error),

    #[error("Deployment failed: {0:#}")]
    Deployment(anyhow::Error),
}

impl BuildError {
    /// Stage the fault belongs to. Rejected plans count as planning faults.
    pub fn stage(&self) -> Stage {
        match self {
            BuildError::Planning(_) | BuildError::InvalidPlan(_) => Stage::Planning,
            BuildError::Generation(_) => Stage::Generation,
            BuildError::Testing(_) => Stage::Testing,
            BuildError::Deployment(_) => Stage::Deployment,
        }
    }

    pub fn help_message(&self) -> Option<String> {
        match self {
            BuildError::Planning(e) => Some(e.help_message()),
            BuildError::InvalidPlan(_) => {
                Some("The model produced an unsafe or inconsistent plan; rerunning often helps".to_string())
            }
            _ => None,
        }
    }
}
