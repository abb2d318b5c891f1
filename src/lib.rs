//! appforge - build an application from one natural-language prompt
//!
//! A prompt goes to an LLM, which answers with a structured build plan. The
//! plan is validated, decomposed into one subtask per file, and handed in
//! order to code generation, testing and deployment collaborators.
//!
//! # Example Usage
//!
//! ```no_run
//! use appforge::pipeline::{BuildOrchestrator, PipelineConfig};
//! use appforge::planning::PlanningStage;
//! use appforge::stages::{FileCheckRunner, PreviewDeployer, ScaffoldGenerator};
//! use appforge::AppforgeConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppforgeConfig::from_env()?;
//! let client = config.create_client()?;
//!
//! let mut orchestrator = BuildOrchestrator::new(
//!     Arc::new(PlanningStage::new(client)),
//!     Arc::new(ScaffoldGenerator::new()),
//!     Arc::new(FileCheckRunner::new()),
//!     Arc::new(PreviewDeployer::default()),
//!     PipelineConfig::new().with_output_root(config.output_dir.clone()),
//! );
//!
//! let result = orchestrator.build("Build a todo app with React").await;
//! println!("success: {}", result.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`plan`]: plan schema, decomposition and validation
//! - [`planning`]: prompt to plan via the LLM
//! - [`pipeline`]: stage sequencing and result records
//! - [`stages`]: default generation, testing and deployment collaborators
//! - [`llm`]: provider-neutral LLM client layer

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod plan;
pub mod planning;
pub mod progress;
pub mod stages;
pub mod util;

pub use config::{AppforgeConfig, ConfigError};
pub use llm::{BackendError, GenAIClient, LLMClient, MockLLMClient};
pub use pipeline::{BuildOrchestrator, BuildResult, PipelineConfig};
pub use plan::{decompose, is_valid, Plan, Subtask};
pub use planning::{PlanningError, PlanningStage};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
