mod list;
mod submit;

use skycast_client::ForecastClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let client = ForecastClient::new(cli.base_url.clone());

    match &cli.command {
        Command::List { json } => list::run(&client, *json).await,
        Command::Submit {
            date,
            temperature_c,
            summary,
        } => submit::run(&client, date, *temperature_c, summary.as_deref()).await,
    }
}
