use thiserror::Error;

use skycast_core::Violation;

/// Failures surfaced by the forecast client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The candidate failed the shared rule set, either locally before the
    /// request was sent or on the server.
    #[error("forecast rejected: {}", summarize(.0))]
    Rejected(Vec<Violation>),

    #[error("unexpected status {status} from forecast API")]
    UnexpectedStatus { status: u16 },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join("; ")
}
