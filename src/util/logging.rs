//! Structured logging setup for appforge
//!
//! Logs always go to stderr so they never interleave with JSON or YAML
//! results printed on stdout.
//!
//! Level precedence: `--log-level`, then `-v`/`-q`, then `APPFORGE_LOG_LEVEL`.
//! When `RUST_LOG` is set it replaces the resulting filter entirely, including
//! the caps on noisy dependencies.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Dependencies that are chatty at debug level
const NOISY_TARGETS: [&str; 4] = ["h2", "hyper", "reqwest", "genai"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for appforge's own events
    pub level: Level,

    /// Emit one JSON object per event
    pub use_json: bool,

    /// Include the module target (e.g., appforge::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Resolves the level from CLI flags, falling back to `env_level`.
    pub fn from_flags(
        log_level: Option<&str>,
        verbose: bool,
        quiet: bool,
        env_level: Option<&str>,
    ) -> Self {
        // Unknown names fall back to the default; config validation reports them.
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Some(Level::DEBUG)
        } else if quiet {
            Some(Level::ERROR)
        } else {
            env_level.and_then(parse_level)
        }
        .unwrap_or(Level::WARN);

        let use_json = env::var("APPFORGE_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            include_location: verbose,
            ..Default::default()
        }
    }
}

/// Parses a log level case-insensitively
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn build_filter(level: Level, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    let mut filter = EnvFilter::new(format!("appforge={}", level));
    for target in NOISY_TARGETS {
        if let Ok(directive) = format!("{}=warn", target).parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty());
        let filter = build_filter(config.level, rust_log.as_deref());

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}
