//! Configuration management for appforge
//!
//! Settings are loaded from environment variables with sensible defaults; the
//! CLI then overrides individual values from its flags.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: credential for the planning model - **required to build**
//! - `APPFORGE_MODEL`: model name - default: "gpt-4-turbo"
//! - `APPFORGE_TEMPERATURE`: planning temperature, 0.0 to 2.0 - default: "0.7"
//! - `APPFORGE_REQUEST_TIMEOUT`: timeout in seconds - default: "60"
//! - `APPFORGE_OUTPUT_DIR`: parent directory for generated apps - default: "./generated_apps"
//! - `APPFORGE_API_BASE_URL`: endpoint override for OpenAI-compatible servers
//! - `APPFORGE_GITHUB_OWNER`: owner used in reported repository URLs - default: "appforge"
//! - `APPFORGE_PREVIEW_DOMAIN`: domain used in reported preview URLs - default: "appforge.dev"
//! - `APPFORGE_LOG_LEVEL`: logging level - default: "warn"

use genai::adapter::AdapterKind;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::llm::GenAIClient;
use crate::pipeline::config::DEFAULT_OUTPUT_ROOT;
use crate::stages::{DEFAULT_GITHUB_OWNER, DEFAULT_PREVIEW_DOMAIN};
use crate::util::logging::parse_level;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_MODEL: &str = "gpt-4-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Credential not set
    #[error("OPENAI_API_KEY not found in environment variables")]
    MissingApiKey,

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

impl ConfigError {
    pub fn help_message(&self) -> Option<String> {
        match self {
            ConfigError::MissingApiKey => Some(format!("Set it with: export {}=sk-...", API_KEY_VAR)),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AppforgeConfig {
    /// Credential for the planning model
    pub api_key: Option<String>,

    pub model: String,

    pub temperature: f32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Parent directory of generated projects
    pub output_dir: PathBuf,

    /// Endpoint override for OpenAI-compatible servers
    pub api_base_url: Option<String>,

    pub github_owner: String,

    pub preview_domain: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppforgeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            api_base_url: None,
            github_owner: DEFAULT_GITHUB_OWNER.to_string(),
            preview_domain: DEFAULT_PREVIEW_DOMAIN.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::ParseError {
        field: field.to_string(),
        error: e.to_string(),
    })
}

impl AppforgeConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let temperature = match get("APPFORGE_TEMPERATURE") {
            Some(raw) => parse_field("APPFORGE_TEMPERATURE", &raw)?,
            None => defaults.temperature,
        };
        let request_timeout_secs = match get("APPFORGE_REQUEST_TIMEOUT") {
            Some(raw) => parse_field("APPFORGE_REQUEST_TIMEOUT", &raw)?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self {
            api_key: get(API_KEY_VAR),
            model: get("APPFORGE_MODEL").unwrap_or(defaults.model),
            temperature,
            request_timeout_secs,
            output_dir: get("APPFORGE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            api_base_url: get("APPFORGE_API_BASE_URL"),
            github_owner: get("APPFORGE_GITHUB_OWNER").unwrap_or(defaults.github_owner),
            preview_domain: get("APPFORGE_PREVIEW_DOMAIN").unwrap_or(defaults.preview_domain),
            log_level: get("APPFORGE_LOG_LEVEL")
                .map(|l| l.to_lowercase())
                .unwrap_or(defaults.log_level),
        })
    }

    /// Validates the configuration
    ///
    /// Checks numeric ranges and the log level. The credential is checked
    /// separately by [`Self::require_api_key`] so `--help`-style paths work
    /// without one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValidationFailed(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model name cannot be empty".to_string(),
            ));
        }

        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Builds the OpenAI client. Fails before any network activity when the
    /// credential is missing.
    pub fn create_client(&self) -> Result<Arc<GenAIClient>, ConfigError> {
        let api_key = self.require_api_key()?;
        Ok(Arc::new(GenAIClient::new(
            AdapterKind::OpenAI,
            self.model.clone(),
            api_key.to_string(),
            self.api_base_url.clone(),
            self.request_timeout(),
        )))
    }
}

/// Keeps the first and last four characters; short keys are fully hidden.
fn mask_api_key(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for AppforgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppforgeConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("output_dir", &self.output_dir)
            .field("api_base_url", &self.api_base_url)
            .field("github_owner", &self.github_owner)
            .field("preview_domain", &self.preview_domain)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl fmt::Display for AppforgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appforge Configuration:")?;
        writeln!(
            f,
            "  API Key: {}",
            self.api_key
                .as_deref()
                .map(mask_api_key)
                .unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Temperature: {}", self.temperature)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        if let Some(ref url) = self.api_base_url {
            writeln!(f, "  API Base URL: {}", url)?;
        }
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
