mod cli;
mod commands;
mod error;

use clap::Parser;
use std::process::ExitCode;

use skycast_client::ClientError;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    commands::run(&cli).await
}

fn report(error: &CliError) {
    if let CliError::Client(ClientError::Rejected(violations)) = error {
        eprintln!("error: forecast rejected");
        for violation in violations {
            eprintln!("  {}: {}", violation.field, violation.message);
        }
    } else {
        eprintln!("error: {error}");
    }
}
