//! Main entry point for the blp2bmp CLI

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;

use blp2bmp::cli::{Cli, Commands};
use blp2bmp::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` (default `warn`) unless a level was given on the command line
fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Info { files } => commands::info::execute(&files),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            Ok(())
        }
    }
}
