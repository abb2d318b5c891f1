use thiserror::Error;

use crate::llm::BackendError;

/// Errors that can occur while turning a prompt into a plan
#[derive(Debug, Error)]
pub enum PlanningError {
    /// Prompt was empty or only whitespace
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// The LLM call itself failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Response body was not parseable JSON
    #[error("Plan response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Response was JSON but lacked required top-level keys
    #[error("Plan is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Required keys present but their values have the wrong shape
    #[error("Plan is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl PlanningError {
    /// Returns a user-friendly error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            PlanningError::EmptyPrompt => {
                "Describe the application you want, e.g. \"Build a todo app with React\"".to_string()
            }
            PlanningError::Backend(BackendError::AuthenticationError { .. }) => {
                "Check that OPENAI_API_KEY holds a valid key".to_string()
            }
            PlanningError::Backend(BackendError::RateLimitError { .. }) => {
                "The provider is rate limiting requests; wait and try again".to_string()
            }
            PlanningError::Backend(BackendError::TimeoutError { .. }) => {
                "The request timed out; raise --timeout or APPFORGE_REQUEST_TIMEOUT".to_string()
            }
            PlanningError::Backend(_) => {
                "Check network connectivity and the configured API base URL".to_string()
            }
            PlanningError::InvalidJson(_)
            | PlanningError::MissingFields(_)
            | PlanningError::Malformed(_) => {
                "The model returned an unusable plan; rerunning often helps".to_string()
            }
        }
    }
}
