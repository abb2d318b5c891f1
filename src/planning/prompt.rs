//! System prompt for plan generation

use crate::plan::{AppType, Auth, Backend, Database, Frontend, Styling};

/// Builds the instruction that pins the model to the plan's JSON shape.
///
/// The enumerated tags come from the schema enums so the prompt and the
/// decoder cannot drift apart.
pub fn system_prompt() -> String {
    format!(
        r#"You are an expert software architect. Analyze the user's request and create a detailed implementation plan.

Your response MUST be valid JSON with this structure:
{{
  "app_type": "{app_types}",
  "app_name": "suggested-app-name",
  "description": "Brief description",
  "tech_stack": {{
    "frontend": "{frontend}",
    "backend": "{backend}",
    "database": "{database}",
    "styling": "{styling}",
    "auth": "{auth}"
  }},
  "features": [
    "Feature 1",
    "Feature 2"
  ],
  "tasks": [
    {{
      "id": 1,
      "name": "Task name",
      "description": "What to do",
      "files_to_create": ["file1.js", "file2.jsx"],
      "dependencies": []
    }}
  ],
  "estimated_time_minutes": 5
}}

Rules:
- app_name is used as a directory name: letters, digits, '.', '_' and '-' only
- files_to_create holds paths relative to the project root, never absolute and never containing ".."
- task ids are unique integers; dependencies list ids of earlier tasks

Be specific and comprehensive."#,
        app_types = AppType::choices(),
        frontend = Frontend::choices(),
        backend = Backend::choices(),
        database = Database::choices(),
        styling = Styling::choices(),
        auth = Auth::choices(),
    )
}
