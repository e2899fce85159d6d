use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Exit code for a run that aborted on a defect.
const DEFECT_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::CheckDevFiles(args) => commands::check_dev_files::run(&cli.root, args),
        Commands::SetNbCells(args) => commands::set_nb_cells::run(&cli.root, args),
        Commands::Completion(args) => commands::completion::run(args)
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            output::defect(&err);
            ExitCode::from(DEFECT_EXIT_CODE)
        }
    }
}
