use serde_json::json;

use skycast_client::ForecastClient;

use crate::error::CliError;

pub async fn run(
    client: &ForecastClient,
    date: &str,
    temperature_c: i64,
    summary: Option<&str>,
) -> Result<(), CliError> {
    let mut candidate = json!({
        "date": date,
        "temperatureC": temperature_c,
    });
    if let Some(summary) = summary {
        candidate["summary"] = json!(summary);
    }

    client.submit(&candidate).await?;
    println!("forecast accepted");

    Ok(())
}
