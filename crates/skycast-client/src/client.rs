use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use skycast_core::{validate_candidate, ForecastReading, Validated, Violation};

use crate::ClientError;

/// HTTP client for the forecast API.
///
/// `submit` rejects a bad candidate locally, with the violations the
/// server would have returned, without a network round trip.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
}

/// Shape of the server's 400 body.
#[derive(Debug, Deserialize)]
struct Rejection {
    errors: Vec<Violation>,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/forecasts", self.base_url)
    }

    /// Every forecast the server holds, each with derived Fahrenheit.
    pub async fn list(&self) -> Result<Vec<ForecastReading>, ClientError> {
        let response = self.http.get(self.endpoint()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Submit a candidate, pre-checking it against the shared rule set.
    pub async fn submit(&self, candidate: &Value) -> Result<(), ClientError> {
        if let Validated::Invalid(violations) = validate_candidate(candidate) {
            return Err(ClientError::Rejected(violations));
        }

        let response = self.http.post(self.endpoint()).json(candidate).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::BAD_REQUEST => {
                let rejection: Rejection = response.json().await?;
                Err(ClientError::Rejected(rejection.errors))
            }
            status => Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}
