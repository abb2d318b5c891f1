//! Planning stage: prompt in, [`crate::plan::Plan`] out
//!
//! Sends a fixed system instruction plus the user's prompt to the LLM in JSON
//! mode, then decodes the reply through the required-field check. No retries;
//! a failed call or unusable body surfaces as a [`PlanningError`].

mod error;
mod prompt;
mod stage;

pub use error::PlanningError;
pub use prompt::system_prompt;
pub use stage::{parse_plan, PlanningStage, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
