//! Build pipeline: Planning → Code Generation → Testing → Deployment
//!
//! [`BuildOrchestrator`] owns the sequencing and fault conversion. The work of
//! each stage sits behind the traits in [`collaborators`], and progress is
//! reported through [`crate::progress::ProgressHandler`] events.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod result;
pub mod stage;

pub use collaborators::{CodeGenerator, Deployer, Deployment, Planner, TestReport, TestRunner};
pub use config::PipelineConfig;
pub use error::BuildError;
pub use orchestrator::BuildOrchestrator;
pub use result::{BuildFailure, BuildResult, BuildSummary};
pub use stage::{BuildState, Stage};
