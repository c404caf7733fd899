//! Roster CLI entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start file logging, then hand the terminal to the menu shell.

mod cli;
mod input;
mod shell;

use clap::Parser;
use cli::Cli;
use input::EditorInput;
use log::{error, info};
use roster_core::{init_logging, EmployeeService, TextFileEmployeeRepository};
use shell::Shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match std::env::current_dir() {
        Ok(cwd) => {
            let log_dir = cli.resolved_log_dir(&cwd);
            if let Err(err) = init_logging(cli.log_level(), &log_dir) {
                eprintln!("warning: file logging disabled: {err}");
            }
        }
        Err(err) => {
            eprintln!("warning: file logging disabled: cannot resolve working directory: {err}")
        }
    }

    let repo = TextFileEmployeeRepository::new(&cli.data_file);
    info!(
        "event=cli_start module=cli status=ok core_version={} data_file={}",
        roster_core::core_version(),
        repo.path().display()
    );

    let input = match EditorInput::new() {
        Ok(input) => input,
        Err(err) => {
            error!(
                "event=cli_start module=cli status=error error_code=terminal_unavailable error={err}"
            );
            eprintln!("error: cannot open terminal: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = EmployeeService::new(repo);
    let mut shell = Shell::new(service, input, io::stdout());

    if let Err(err) = shell.run() {
        error!("event=cli_exit module=cli status=error error={err}");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
