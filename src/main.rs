use std::process::ExitCode;

use clap::Parser;
use round_robin::commands::assign_cmd::assign_command;
use round_robin::commands::base_commands::{CliArgs, Commands};
use round_robin::commands::completions_cmd::completions_command;
use round_robin::commands::sheets_cmd::sheets_command;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Assign { sampling, output } => assign_command(sampling, output),
        Commands::Sheets {
            sampling,
            output,
            ceremony_label,
        } => sheets_command(sampling, output, ceremony_label),
        Commands::Completions { shell } => {
            completions_command(shell);
            ExitCode::SUCCESS
        }
    }
}
