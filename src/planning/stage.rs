use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::PlanningError;
use super::prompt::system_prompt;
use crate::llm::{extract_json, ChatMessage, LLMClient, LLMRequest};
use crate::pipeline::Planner;
use crate::plan::{missing_fields, Plan};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Turns a free-text prompt into a [`Plan`] with one LLM call
pub struct PlanningStage {
    client: Arc<dyn LLMClient>,
    temperature: f32,
    max_tokens: u32,
}

impl PlanningStage {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub async fn analyze(&self, prompt: &str) -> Result<Plan, PlanningError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PlanningError::EmptyPrompt);
        }

        info!(backend = self.client.name(), "Requesting build plan");

        let request = LLMRequest::new(vec![
            ChatMessage::system(system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_temperature(self.temperature)
        .with_max_tokens(self.max_tokens)
        .json_object();

        let response = self.client.chat(request).await?;
        debug!(
            response_time_ms = response.response_time.as_millis(),
            chars = response.content.len(),
            "Plan response received"
        );

        parse_plan(&response.content)
    }
}

/// Parses, checks and decodes a raw plan body.
pub fn parse_plan(content: &str) -> Result<Plan, PlanningError> {
    let raw: Value =
        serde_json::from_str(extract_json(content)).map_err(PlanningError::InvalidJson)?;

    let missing = missing_fields(&raw);
    if !missing.is_empty() {
        return Err(PlanningError::MissingFields(missing));
    }

    let plan: Plan = serde_json::from_value(raw).map_err(PlanningError::Malformed)?;
    debug!(
        app_name = %plan.app_name,
        tasks = plan.tasks.len(),
        files = plan.file_count(),
        "Plan decoded"
    );
    Ok(plan)
}

#[async_trait]
impl Planner for PlanningStage {
    async fn plan(&self, prompt: &str) -> Result<Plan, PlanningError> {
        self.analyze(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{BackendError, MockLLMClient, MockResponse, ResponseFormat};
    use crate::plan::AppType;
    use serde_json::json;

    fn plan_json() -> Value {
        json!({
            "app_type": "web_app",
            "app_name": "todo-app",
            "description": "A todo list",
            "tech_stack": {"frontend": "react", "backend": "none", "database": "firebase"},
            "features": ["add todos", "auth"],
            "tasks": [
                {"id": 1, "name": "UI", "files_to_create": ["src/App.jsx", "src/index.js"]},
                {"id": 2, "name": "Auth", "files_to_create": ["src/auth.js"], "dependencies": [1]}
            ],
            "estimated_time_minutes": 4
        })
    }

    fn stage_with(responses: Vec<MockResponse>) -> (Arc<MockLLMClient>, PlanningStage) {
        let client = Arc::new(MockLLMClient::new());
        client.add_responses(responses);
        let stage = PlanningStage::new(client.clone());
        (client, stage)
    }

    #[tokio::test]
    async fn test_analyze_decodes_plan() {
        let (client, stage) = stage_with(vec![MockResponse::json(&plan_json())]);

        let plan = stage.analyze("Build a todo app with React").await.unwrap();

        assert_eq!(plan.app_type, AppType::WebApp);
        assert_eq!(plan.tasks.len(), 2);
        assert_eq!(plan.file_count(), 3);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let (client, stage) = stage_with(vec![MockResponse::json(&plan_json())]);
        let stage = stage.with_temperature(0.2);

        stage.analyze("  Create a REST API for a bookstore  ").await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.response_format, ResponseFormat::JsonObject);
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.user_prompt(), Some("Create a REST API for a bookstore"));
        assert!(request.system_prompt().unwrap().contains("files_to_create"));
    }

    #[tokio::test]
    async fn test_empty_prompt_makes_no_call() {
        let (client, stage) = stage_with(vec![]);

        let err = stage.analyze("   ").await.unwrap_err();

        assert!(matches!(err, PlanningError::EmptyPrompt));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let (_, stage) = stage_with(vec![MockResponse::error(BackendError::RateLimitError {
            retry_after: Some(10),
        })]);

        let err = stage.analyze("Build a blog").await.unwrap_err();
        assert!(matches!(
            err,
            PlanningError::Backend(BackendError::RateLimitError { .. })
        ));
    }

    #[tokio::test]
    async fn test_non_json_response() {
        let (_, stage) = stage_with(vec![MockResponse::text("Sure! Here's a plan...")]);

        let err = stage.analyze("Build a blog").await.unwrap_err();
        assert!(matches!(err, PlanningError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_plan_accepts_fenced_json() {
        let content = format!("```json\n{}\n```", plan_json());
        let plan = parse_plan(&content).unwrap();
        assert_eq!(plan.app_name, "todo-app");
    }

    #[test]
    fn test_parse_plan_missing_fields() {
        let err = parse_plan(r#"{"app_type": "api", "features": []}"#).unwrap_err();
        match err {
            PlanningError::MissingFields(fields) => {
                assert_eq!(fields, vec!["tech_stack", "tasks"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plan_wrong_types() {
        let err = parse_plan(
            r#"{"app_type": "api", "tech_stack": {}, "features": "many", "tasks": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PlanningError::Malformed(_)));
    }

    #[test]
    fn test_parse_plan_task_without_id() {
        let err = parse_plan(
            r#"{"app_type": "api", "tech_stack": {}, "features": [], "tasks": [{"name": "x"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PlanningError::Malformed(_)));
    }
}
