//! CLI module graph and command dispatch.

pub mod chart;
pub mod command;
pub mod employee;
pub mod export;
pub mod init;
pub mod notifier;
pub mod output;
pub mod request;

use std::sync::Arc;

use crate::error::Result;
use crate::infrastructure::bootstrap::build_service;
use crate::infrastructure::config::Config;
use command::{Cli, Commands, EmployeeCommand, RequestCommand};
use notifier::ConsoleNotifier;

/// Run one parsed command against the configured database.
///
/// Tables are created before every command, so a fresh database file is
/// ready for writes without a separate `init`.
///
/// `Ok(false)` means the service already reported a failure to the user.
///
/// # Errors
/// Returns an error if the database cannot be opened or a report cannot be
/// written.
pub fn dispatch(cli: &Cli, config: &Config) -> Result<bool> {
    let service = build_service(config, Arc::new(ConsoleNotifier))?;
    if !service.initialize() {
        return Ok(false);
    }

    let ok = match &cli.command {
        Commands::Init => init::execute(config),
        Commands::Employee(EmployeeCommand::Add(args)) => employee::add(&service, args),
        Commands::Employee(EmployeeCommand::List) => employee::list(&service),
        Commands::Request(RequestCommand::Add(args)) => request::add(&service, &args.content),
        Commands::Request(RequestCommand::List) => request::list(&service),
        Commands::Export(args) => {
            export::execute(&service, config, &args.output)?;
            true
        }
        Commands::Chart(args) => {
            chart::execute(&service, args.kind, args.output.as_deref())?;
            true
        }
    };
    Ok(ok)
}
