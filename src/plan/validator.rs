use anyhow::Result;
use serde_json::Value;

use super::rules::{
    KnownAppTypeRule, PositiveEstimateRule, SafeAppNameRule, SafeFilePathsRule,
    UniqueTaskIdsRule, ValidationRule,
};
use super::schema::Plan;

/// Top-level keys a raw plan must carry before it is decoded
pub const REQUIRED_FIELDS: [&str; 4] = ["app_type", "tech_stack", "features", "tasks"];

/// Checks that a raw plan has every required key. Values are not inspected.
pub fn is_valid(raw: &Value) -> bool {
    raw.is_object() && missing_fields(raw).is_empty()
}

/// Required keys absent from `raw`; all of them when `raw` is not an object.
pub fn missing_fields(raw: &Value) -> Vec<&'static str> {
    match raw.as_object() {
        Some(map) => REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect(),
        None => REQUIRED_FIELDS.to_vec(),
    }
}

/// Semantic checks on a decoded plan
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    pub fn validate(&self, plan: &Plan) -> Result<()> {
        for rule in &self.rules {
            if let Err(e) = rule.validate(plan) {
                anyhow::bail!("[{}] {}", rule.name(), e);
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: vec![
                Box::new(KnownAppTypeRule),
                Box::new(SafeAppNameRule),
                Box::new(UniqueTaskIdsRule),
                Box::new(SafeFilePathsRule),
                Box::new(PositiveEstimateRule),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use yare::parameterized;

    fn full_raw() -> Value {
        json!({
            "app_type": "web_app",
            "app_name": "todo",
            "tech_stack": {"frontend": "react"},
            "features": ["add items"],
            "tasks": [{"id": 1, "files_to_create": ["index.html"]}]
        })
    }

    fn create_minimal_valid_plan() -> Plan {
        serde_json::from_value(full_raw()).unwrap()
    }

    #[test]
    fn test_all_fields_present() {
        assert!(is_valid(&full_raw()));
        assert!(missing_fields(&full_raw()).is_empty());
    }

    #[parameterized(
        app_type = { "app_type" },
        tech_stack = { "tech_stack" },
        features = { "features" },
        tasks = { "tasks" },
    )]
    fn test_missing_one_field(field: &str) {
        let mut raw = full_raw();
        raw.as_object_mut().unwrap().remove(field);

        assert!(!is_valid(&raw));
        assert_eq!(missing_fields(&raw), vec![field]);
    }

    #[test]
    fn test_contents_are_not_inspected() {
        let raw = json!({
            "app_type": 42,
            "tech_stack": null,
            "features": "nope",
            "tasks": {}
        });
        assert!(is_valid(&raw));
    }

    #[parameterized(
        array = { json!([1, 2]) },
        string = { json!("plan") },
        null = { Value::Null },
    )]
    fn test_non_object_is_invalid(raw: Value) {
        assert!(!is_valid(&raw));
        assert_eq!(missing_fields(&raw).len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn test_validator_valid_plan() {
        let plan = create_minimal_valid_plan();
        assert!(Validator::new().validate(&plan).is_ok());
    }

    #[test]
    fn test_validator_custom_app_type() {
        let mut plan = create_minimal_valid_plan();
        plan.app_type = super::super::schema::AppType::Custom("game".to_string());
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().starts_with("[KnownAppType]"));
    }

    #[test]
    fn test_validator_unsafe_app_name() {
        let mut plan = create_minimal_valid_plan();
        plan.app_name = "../../etc".to_string();
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().contains("SafeAppName"));
    }

    #[test]
    fn test_validator_empty_app_name() {
        let mut plan = create_minimal_valid_plan();
        plan.app_name = String::new();
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validator_duplicate_task_ids() {
        let mut plan = create_minimal_valid_plan();
        let dup = plan.tasks[0].clone();
        plan.tasks.push(dup);
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().contains("UniqueTaskIds"));
    }

    #[test]
    fn test_validator_escaping_file() {
        let mut plan = create_minimal_valid_plan();
        plan.tasks[0].files_to_create.push("../outside.js".to_string());
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().contains("SafeFilePaths"));
        assert!(err.to_string().contains("files_to_create[1]"));
    }

    #[parameterized(
        negative = { -3.0 },
        zero = { 0.0 },
    )]
    fn test_validator_non_positive_estimate(minutes: f64) {
        let mut plan = create_minimal_valid_plan();
        plan.estimated_time_minutes = minutes;
        let err = Validator::new().validate(&plan).unwrap_err();
        assert!(err.to_string().starts_with("[PositiveEstimate]"));
    }

    #[test]
    fn test_with_no_rules_accepts_anything() {
        let mut plan = create_minimal_valid_plan();
        plan.app_name = "..".to_string();
        assert!(Validator::with_rules(vec![]).validate(&plan).is_ok());
    }
}
