use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use skycast_core::{validate_candidate, Validated, Violation};
use skycast_store::ForecastStore;

use crate::{WebConfig, WebError};

const ACCEPTED_MESSAGE: &str = "Weather forecast added successfully";

/// Routes for the forecast resource over a shared store handle.
pub fn router(store: ForecastStore) -> Router {
    Router::new()
        .route("/forecasts", get(list_forecasts).post(submit_forecast))
        .with_state(store)
}

/// Cross-origin policy for the browser frontend: one allowed origin, any
/// header, any method.
pub fn cors_layer(config: &WebConfig) -> Result<CorsLayer, WebError> {
    let origin: HeaderValue =
        config
            .allowed_origin
            .parse()
            .map_err(|_| WebError::InvalidOrigin {
                value: config.allowed_origin.clone(),
            })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_headers(Any)
        .allow_methods(Any))
}

/// Confirmation echoed for an accepted submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAccepted {
    pub message: String,
}

/// Structured rejection: every violation, so a client can attribute each
/// one to a form field.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRejected {
    pub errors: Vec<Violation>,
}

async fn list_forecasts(State(store): State<ForecastStore>) -> Response {
    Json(store.list().await).into_response()
}

async fn submit_forecast(State(store): State<ForecastStore>, body: Bytes) -> Response {
    // An undecodable body is a validation failure, not a transport fault;
    // null falls out of the engine as the whole-payload violation.
    let candidate: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    match validate_candidate(&candidate) {
        Validated::Valid(forecast) => {
            store.append(forecast).await;
            tracing::info!("forecast accepted");
            Json(SubmitAccepted {
                message: ACCEPTED_MESSAGE.to_owned(),
            })
            .into_response()
        }
        Validated::Invalid(violations) => {
            tracing::debug!(count = violations.len(), "forecast rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(SubmitRejected { errors: violations }),
            )
                .into_response()
        }
    }
}
