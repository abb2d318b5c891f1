use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const USAGE_EXAMPLES: &str = "Examples:\n  \
    appforge \"Build a todo app with React and Firebase auth\"\n  \
    appforge \"Create a REST API for a bookstore\"\n  \
    appforge \"Build an e-commerce site with Stripe integration\"";

/// Builds an application from a single natural-language prompt
#[derive(Parser, Debug)]
#[command(
    name = "appforge",
    about = "Build an application from a single natural-language prompt",
    version,
    author,
    long_about = "appforge asks an LLM for a structured build plan, then generates the \
                  planned files, checks them and reports where the app would be published.\n\n\
                  Requires OPENAI_API_KEY in the environment.",
    after_help = USAGE_EXAMPLES
)]
pub struct CliArgs {
    #[arg(
        value_name = "PROMPT",
        help = "Description of the app to build; multiple words are joined with spaces"
    )]
    pub prompt: Vec<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Parent directory for generated apps [default: ./generated_apps]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model name to use [default: gpt-4-turbo]"
    )]
    pub model: Option<String>,

    #[arg(long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "TEMP", help = "Planning temperature (0.0-2.0)")]
    pub temperature: Option<f32>,

    #[arg(long, help = "Write placeholder files instead of asking the LLM for file contents")]
    pub scaffold_only: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Positional words joined with single spaces, or `None` when absent
    pub fn prompt_text(&self) -> Option<String> {
        let joined = self.prompt.join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["appforge", "Build", "a", "blog"]);
        assert_eq!(args.prompt_text(), Some("Build a blog".to_string()));
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(args.output_dir.is_none());
        assert!(args.model.is_none());
        assert!(!args.scaffold_only);
    }

    #[test]
    fn test_no_prompt_parses() {
        let args = CliArgs::parse_from(["appforge"]);
        assert!(args.prompt_text().is_none());
    }

    #[test]
    fn test_with_options() {
        let args = CliArgs::parse_from([
            "appforge",
            "--output-dir",
            "/tmp/apps",
            "-m",
            "gpt-4o",
            "--timeout",
            "120",
            "--temperature",
            "0.2",
            "--scaffold-only",
            "-f",
            "json",
            "Create a REST API",
        ]);

        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/apps")));
        assert_eq!(args.model.as_deref(), Some("gpt-4o"));
        assert_eq!(args.timeout, Some(120));
        assert_eq!(args.temperature, Some(0.2));
        assert!(args.scaffold_only);
        assert_eq!(args.format, OutputFormatArg::Json);
        assert_eq!(args.prompt_text().as_deref(), Some("Create a REST API"));
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["appforge", "-v", "x"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CliArgs::try_parse_from(["appforge", "-v", "-q", "x"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["appforge", "--log-level", "debug", "x"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
