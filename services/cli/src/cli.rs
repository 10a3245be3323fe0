use crate::commands::{
    run_demo, run_format_phone, run_options, run_validate, FormatPhoneArgs, ValidateArgs,
};
use clap::{Parser, Subcommand};
use roadside_intake::config::AppConfig;
use roadside_intake::error::AppError;
use roadside_intake::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "roadside-intake",
    about = "Validate and format roadside-assistance requests from the command line",
    version
)]
struct Cli {
    /// Pretty-print JSON output (overrides APP_OUTPUT_PRETTY)
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize the phone number and validate a JSON request
    Validate(ValidateArgs),
    /// Format a Nigerian phone number the way the request form does
    FormatPhone(FormatPhoneArgs),
    /// List the accepted issue, vehicle make, and urgency values
    Options,
    /// Walk through a scripted request form session
    Demo,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if cli.pretty {
        config.output.pretty = true;
    }

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, command = ?cli.command, "intake cli starting");

    match cli.command {
        Command::Validate(args) => run_validate(args, &config.output),
        Command::FormatPhone(args) => run_format_phone(args),
        Command::Options => run_options(&config.output),
        Command::Demo => run_demo(),
    }
}
