mod commands;

use clap::{Parser, Subcommand};
use commands::{ComputerArgs, DeliverArgs, GuiArgs};
use kiln_builder::BuildError;
use kiln_core::{init_logging, AppConfigTrait, CoreError, ErrorReport, KilnConfig, LoggingConfig};
use kiln_family::FamilyError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(about = "Build computers, resolve widget families and plan deliveries")]
#[command(version)]
struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a computer from a preset or individual parts
    Computer(ComputerArgs),

    /// Resolve the widget family for an OS and exercise its widgets
    Gui(GuiArgs),

    /// Plan a delivery for a logistics type
    Deliver(DeliverArgs),
}

fn run(cli: &Cli, config: &KilnConfig) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Computer(args) => commands::computer::run(args, cli.json),
        Commands::Gui(args) => commands::gui::run(args, config, cli.json),
        Commands::Deliver(args) => commands::deliver::run(args, cli.json),
    }
}

/// Print a failure as a JSON report or a plain message
fn print_error(error: &anyhow::Error, json: bool) {
    if json {
        let report = error_report(error);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(_) => eprintln!("Error: {}", report.message),
        }
    } else {
        eprintln!("Error: {:#}", error);
    }
}

/// Structured form of a command failure
fn error_report(error: &anyhow::Error) -> ErrorReport {
    if let Some(e) = error.downcast_ref::<BuildError>() {
        ErrorReport::from(e)
    } else if let Some(e) = error.downcast_ref::<FamilyError>() {
        ErrorReport::from(e)
    } else if let Some(e) = error.downcast_ref::<CoreError>() {
        ErrorReport::from(e)
    } else {
        ErrorReport::new("INTERNAL_ERROR", error.to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match KilnConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error(&anyhow::Error::from(CoreError::from(e)), cli.json);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&LoggingConfig::from(&config)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::debug!(
        environment = %config.environment,
        sources = ?config.config_sources(),
        "Configuration loaded"
    );

    match run(&cli, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(error = %error, "Command failed");
            print_error(&error, cli.json);
            ExitCode::FAILURE
        }
    }
}
