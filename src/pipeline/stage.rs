use serde::Serialize;
use std::fmt;

/// The four pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Planning,
    Generation,
    Testing,
    Deployment,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Planning,
        Stage::Generation,
        Stage::Testing,
        Stage::Deployment,
    ];

    /// 1-based position, as shown in progress output
    pub fn number(&self) -> usize {
        match self {
            Stage::Planning => 1,
            Stage::Generation => 2,
            Stage::Testing => 3,
            Stage::Deployment => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Planning => "Analyzing & Planning",
            Stage::Generation => "Generating Code",
            Stage::Testing => "Testing",
            Stage::Deployment => "Deploying",
        }
    }

    /// Spinner text while the stage runs
    pub fn activity(&self) -> &'static str {
        match self {
            Stage::Planning => "Analyzing your request...",
            Stage::Generation => "Writing code...",
            Stage::Testing => "Running tests...",
            Stage::Deployment => "Deploying...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Planning => "planning",
            Stage::Generation => "generation",
            Stage::Testing => "testing",
            Stage::Deployment => "deployment",
        };
        f.write_str(name)
    }
}

/// Where a build currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Start,
    Planned,
    Generated,
    Tested,
    Deployed,
    Done,
    Failed,
}

impl BuildState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildState::Done | BuildState::Failed)
    }

    /// State reached once `stage` completes
    pub fn after(stage: Stage) -> Self {
        match stage {
            Stage::Planning => BuildState::Planned,
            Stage::Generation => BuildState::Generated,
            Stage::Testing => BuildState::Tested,
            Stage::Deployment => BuildState::Deployed,
        }
    }
}
