pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "printadvisor",
    about = "Printadvisor operator CLI",
    long_about = "Inspect printadvisor configuration, audit the recommendation tables, and replay code hook events.",
    after_help = "Examples:\n  printadvisor doctor --json\n  printadvisor catalog\n  printadvisor fulfill event.json\n  cat event.json | printadvisor fulfill -"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Validate config, recommendation table loading, and table completeness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Report table coverage and keys where the two quiz flows disagree")]
    Catalog {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Run one code hook event through the fulfillment handler")]
    Fulfill {
        #[arg(value_name = "EVENT", help = "Path to an event JSON file, or `-` for stdin")]
        path: PathBuf,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Catalog { json } => commands::catalog::run(json),
        Command::Fulfill { path } => commands::fulfill::run(&path),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
