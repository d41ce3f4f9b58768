use clap::Parser;
use tracing::{error, info};

use staffsurvey::adapter::inbound::cli::command::Cli;
use staffsurvey::adapter::inbound::cli::dispatch;
use staffsurvey::adapter::inbound::cli::output::{self, OutputConfig};
use staffsurvey::infrastructure::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), &cli.color);

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(command = ?cli.command, "staffsurvey starting");

    match dispatch(&cli, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
