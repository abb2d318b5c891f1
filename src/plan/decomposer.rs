//! Task decomposition: one subtask per file a plan asks for.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::schema::Plan;

/// What a subtask produces. Files are the only kind today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskKind {
    FileCreation,
}

/// A single file to produce, derived from a plan task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub task_id: u32,
    #[serde(rename = "type")]
    pub kind: SubtaskKind,
    /// Path relative to the project directory
    pub target: String,
    pub description: String,
    pub depends_on: BTreeSet<u32>,
}

/// Expands every task into per-file subtasks.
///
/// Output is grouped by task order, then by file order within each task. No
/// validation happens here; path safety is enforced by whoever writes files.
pub fn decompose(plan: &Plan) -> Vec<Subtask> {
    plan.tasks
        .iter()
        .flat_map(|task| {
            task.files_to_create.iter().map(move |file| Subtask {
                task_id: task.id,
                kind: SubtaskKind::FileCreation,
                target: file.clone(),
                description: format!("Generate {}", file),
                depends_on: task.dependencies.clone(),
            })
        })
        .collect()
}
