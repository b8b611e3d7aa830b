pub mod commands;
pub mod logging;
pub mod view;

use clap::{Parser, Subcommand};
use custform_core::config::{AppConfig, LoadOptions};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "custform",
    about = "Customer record editor",
    long_about = "Edit, validate, and persist the single customer record kept in local storage.",
    after_help = "Examples:\n  custform show\n  custform save --name Ada --employee-id 1815 --city London --gender Female\n  custform edit\n  custform doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the stored customer record as the read-only form")]
    Show {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Apply field values to the stored record, validate, and persist it")]
    Save(commands::save::SaveArgs),
    #[command(about = "Open an interactive edit session on stdin/stdout")]
    Edit,
    #[command(about = "Apply pending local storage migrations and return structured status output")]
    Migrate,
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config, storage connectivity, and stored record health")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        logging::init(&config.logging);
    }

    let result = match cli.command {
        Command::Show { json } => commands::show::run(json),
        Command::Save(args) => commands::save::run(&args),
        Command::Edit => commands::edit::run(),
        Command::Migrate => commands::migrate::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
