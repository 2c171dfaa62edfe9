use skycast_client::ForecastClient;

use crate::error::CliError;

pub async fn run(client: &ForecastClient, json: bool) -> Result<(), CliError> {
    let readings = client.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    println!("{:<12} {:>6} {:>6}  {}", "DATE", "C", "F", "SUMMARY");
    for reading in readings {
        println!(
            "{:<12} {:>6} {:>6}  {}",
            reading.date.format_iso(),
            reading.temperature_c,
            reading.temperature_f,
            reading.summary.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
