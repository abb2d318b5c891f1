use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::fs::write_file;
use crate::llm::{extract_json, ChatMessage, LLMClient, LLMRequest};
use crate::pipeline::CodeGenerator;
use crate::plan::{decompose, Plan, Subtask};

const SYSTEM_PROMPT: &str = r#"You are an expert software engineer writing one file of a larger project.

Respond with a single JSON object of the form {"content": "<full file contents>"}.
Write complete, working code for the requested file only. No explanations."#;

#[derive(Debug, Deserialize)]
struct FileBody {
    content: String,
}

/// Asks the LLM for each file body in turn and writes it under the app dir
pub struct LlmCodeGenerator {
    client: Arc<dyn LLMClient>,
    temperature: f32,
}

impl LlmCodeGenerator {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            temperature: 0.2,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn author(&self, plan: &Plan, subtask: &Subtask) -> Result<String> {
        let request = LLMRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(file_prompt(plan, subtask)),
        ])
        .with_temperature(self.temperature)
        .json_object();

        let response = self
            .client
            .chat(request)
            .await
            .with_context(|| format!("LLM request for {} failed", subtask.target))?;

        let body: FileBody = serde_json::from_str(extract_json(&response.content))
            .with_context(|| format!("Unusable response for {}", subtask.target))?;
        if body.content.trim().is_empty() {
            return Err(anyhow!("Model returned an empty body for {}", subtask.target));
        }
        Ok(body.content)
    }
}

fn file_prompt(plan: &Plan, subtask: &Subtask) -> String {
    let task = plan.tasks.iter().find(|t| t.id == subtask.task_id);
    let mut prompt = format!(
        "Application: {} ({})\nDescription: {}\nTech stack: frontend={}, backend={}, database={}, styling={}, auth={}\n",
        plan.app_name,
        plan.app_type,
        plan.description,
        plan.tech_stack.frontend,
        plan.tech_stack.backend,
        plan.tech_stack.database,
        plan.tech_stack.styling,
        plan.tech_stack.auth,
    );
    if !plan.features.is_empty() {
        prompt.push_str("Features:\n");
        for feature in &plan.features {
            prompt.push_str(&format!("- {}\n", feature));
        }
    }
    if let Some(task) = task {
        prompt.push_str(&format!("Task: {}: {}\n", task.name, task.description));
    }
    prompt.push_str(&format!("\nWrite the file: {}", subtask.target));
    prompt
}

#[async_trait]
impl CodeGenerator for LlmCodeGenerator {
    async fn generate(&self, plan: &Plan, app_dir: &Path) -> Result<Vec<PathBuf>> {
        let subtasks = decompose(plan);
        let mut written = Vec::with_capacity(subtasks.len());

        for (index, subtask) in subtasks.iter().enumerate() {
            debug!(
                file = %subtask.target,
                progress = format!("{}/{}", index + 1, subtasks.len()),
                "Generating file"
            );
            let content = self.author(plan, subtask).await?;
            written.push(write_file(app_dir, &subtask.target, &content).await?);
        }

        info!(files = written.len(), backend = self.client.name(), "Code generated");
        Ok(written)
    }
}
