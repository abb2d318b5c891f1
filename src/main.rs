use appforge::cli::{handle_build, CliArgs};
use appforge::util::{init_logging, LoggingConfig};
use appforge::VERSION;

use clap::Parser;
use std::env;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let env_level = env::var("APPFORGE_LOG_LEVEL").ok();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
        env_level.as_deref(),
    ));

    debug!("appforge v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_build(&args).await;

    std::process::exit(exit_code);
}
