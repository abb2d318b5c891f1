use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{CliArgs, USAGE_EXAMPLES};
use super::output::{OutputFormat, OutputFormatter};
use crate::config::AppforgeConfig;
use crate::llm::LLMClient;
use crate::pipeline::{BuildOrchestrator, CodeGenerator, PipelineConfig};
use crate::planning::PlanningStage;
use crate::progress::{ConsoleHandler, LoggingHandler, ProgressHandler};
use crate::stages::{FileCheckRunner, LlmCodeGenerator, PreviewDeployer, ScaffoldGenerator};

/// CLI flags take precedence over environment values
pub fn apply_overrides(config: &mut AppforgeConfig, args: &CliArgs) {
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if let Some(temperature) = args.temperature {
        config.temperature = temperature;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }
}

fn print_usage() {
    eprintln!("Usage: appforge [OPTIONS] \"Your app description\"");
    eprintln!();
    eprintln!("{}", USAGE_EXAMPLES);
}

/// Runs one build and returns the process exit code.
pub async fn handle_build(args: &CliArgs) -> i32 {
    let Some(prompt) = args.prompt_text() else {
        print_usage();
        return 1;
    };

    let mut config = match AppforgeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    apply_overrides(&mut config, args);
    debug!(?config, "Resolved configuration");

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return 1;
    }

    let client = match config.create_client() {
        Ok(client) => client as Arc<dyn LLMClient>,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(help) = e.help_message() {
                eprintln!("{}", help);
            }
            return 1;
        }
    };
    info!(
        backend = client.name(),
        model = client.model_info().unwrap_or_default(),
        "Using LLM backend"
    );

    let planner = PlanningStage::new(client.clone()).with_temperature(config.temperature);
    let generator: Arc<dyn CodeGenerator> = if args.scaffold_only {
        Arc::new(ScaffoldGenerator::new())
    } else {
        Arc::new(LlmCodeGenerator::new(client.clone()))
    };

    let format: OutputFormat = args.format.into();
    let progress: Arc<dyn ProgressHandler> = if format == OutputFormat::Human && !args.quiet {
        Arc::new(ConsoleHandler::detect())
    } else {
        Arc::new(LoggingHandler)
    };

    let mut orchestrator = BuildOrchestrator::new(
        Arc::new(planner),
        generator,
        Arc::new(FileCheckRunner::new()),
        Arc::new(PreviewDeployer::new(
            config.preview_domain.clone(),
            config.github_owner.clone(),
        )),
        PipelineConfig::new().with_output_root(config.output_dir.clone()),
    )
    .with_progress_handler(progress);

    let result = orchestrator.build(&prompt).await;

    match OutputFormatter::new(format).format(&result) {
        Ok(output) => {
            if format == OutputFormat::Human && !result.is_success() {
                eprint!("{}", output);
            } else {
                println!("\n{}", output.trim_end());
            }
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 1;
        }
    }

    if result.is_success() {
        0
    } else {
        1
    }
}
