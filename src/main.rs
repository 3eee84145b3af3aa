use std::process::ExitCode;

use blogstat::adapter::inbound::cli::command::Cli;
use blogstat::adapter::inbound::cli::{output, run};
use clap::Parser;
use tracing::{debug, error};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(cli.quiet);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
    };
    config.logging.adjusted(cli.verbose, cli.quiet).init();
    debug!(?config, "Configuration loaded");

    match run::execute(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
