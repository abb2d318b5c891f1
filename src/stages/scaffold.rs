use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use super::fs::write_file;
use crate::pipeline::CodeGenerator;
use crate::plan::{decompose, Plan, Subtask};

/// Writes a short placeholder per file. Makes no network calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScaffoldGenerator;

impl ScaffoldGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Placeholder body for one subtask
pub fn placeholder(plan: &Plan, subtask: &Subtask) -> String {
    let mut body = format!(
        "{}\n\nApp: {} ({})\nTask {}: {}\n",
        subtask.description, plan.app_name, plan.app_type, subtask.task_id, subtask.target
    );
    if !subtask.depends_on.is_empty() {
        let deps: Vec<String> = subtask.depends_on.iter().map(|d| d.to_string()).collect();
        body.push_str(&format!("Depends on tasks: {}\n", deps.join(", ")));
    }
    body
}

#[async_trait]
impl CodeGenerator for ScaffoldGenerator {
    async fn generate(&self, plan: &Plan, app_dir: &Path) -> Result<Vec<PathBuf>> {
        let subtasks = decompose(plan);
        let mut written = Vec::with_capacity(subtasks.len());

        for subtask in &subtasks {
            let path = write_file(app_dir, &subtask.target, &placeholder(plan, subtask)).await?;
            written.push(path);
        }

        info!(files = written.len(), "Scaffold written");
        Ok(written)
    }
}
