use std::collections::HashSet;

use anyhow::Result;

use super::paths::{is_contained, is_safe_segment};
use super::schema::{AppType, Plan};

pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, plan: &Plan) -> Result<()>;
}

pub struct KnownAppTypeRule;

impl ValidationRule for KnownAppTypeRule {
    fn name(&self) -> &'static str {
        "KnownAppType"
    }

    fn validate(&self, plan: &Plan) -> Result<()> {
        if plan.app_type.is_custom() {
            anyhow::bail!(
                "Unknown app type '{}', expected one of {}",
                plan.app_type,
                AppType::choices()
            );
        }
        Ok(())
    }
}

pub struct SafeAppNameRule;

impl ValidationRule for SafeAppNameRule {
    fn name(&self) -> &'static str {
        "SafeAppName"
    }

    fn validate(&self, plan: &Plan) -> Result<()> {
        if plan.app_name.is_empty() {
            anyhow::bail!("App name cannot be empty");
        }
        if !is_safe_segment(&plan.app_name) {
            anyhow::bail!(
                "App name '{}' is not usable as a directory name",
                plan.app_name
            );
        }
        Ok(())
    }
}

pub struct UniqueTaskIdsRule;

impl ValidationRule for UniqueTaskIdsRule {
    fn name(&self) -> &'static str {
        "UniqueTaskIds"
    }

    fn validate(&self, plan: &Plan) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &plan.tasks {
            if !seen.insert(task.id) {
                anyhow::bail!("Task id {} appears more than once", task.id);
            }
        }
        Ok(())
    }
}

pub struct SafeFilePathsRule;

impl ValidationRule for SafeFilePathsRule {
    fn name(&self) -> &'static str {
        "SafeFilePaths"
    }

    fn validate(&self, plan: &Plan) -> Result<()> {
        for task in &plan.tasks {
            for (i, file) in task.files_to_create.iter().enumerate() {
                if !is_contained(file) {
                    anyhow::bail!(
                        "Task {} files_to_create[{}] '{}' escapes the project directory",
                        task.id,
                        i,
                        file
                    );
                }
            }
        }
        Ok(())
    }
}

pub struct PositiveEstimateRule;

impl ValidationRule for PositiveEstimateRule {
    fn name(&self) -> &'static str {
        "PositiveEstimate"
    }

    fn validate(&self, plan: &Plan) -> Result<()> {
        let minutes = plan.estimated_time_minutes;
        if !minutes.is_finite() || minutes <= 0.0 {
            anyhow::bail!(
                "Estimated time must be a positive number of minutes, got {}",
                minutes
            );
        }
        Ok(())
    }
}
