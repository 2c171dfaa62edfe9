use clap::{Parser, Subcommand};

/// Command-line client for the skycast forecast API.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about)]
pub struct Cli {
    /// Base URL of the forecast API.
    #[arg(long, global = true, default_value = "http://127.0.0.1:5080")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every stored forecast with its derived Fahrenheit value.
    List {
        /// Emit raw JSON instead of the table view.
        #[arg(long)]
        json: bool,
    },

    /// Submit a new forecast candidate.
    Submit {
        /// Forecast date, YYYY-MM-DD.
        #[arg(long)]
        date: String,

        /// Temperature in degrees Celsius, -100..=100.
        #[arg(long)]
        temperature_c: i64,

        /// Optional label, at most 100 characters.
        #[arg(long)]
        summary: Option<String>,
    },
}
