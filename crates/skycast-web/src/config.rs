use std::net::SocketAddr;

use crate::WebError;

const DEFAULT_ADDR: &str = "127.0.0.1:5080";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub addr: SocketAddr,
    pub allowed_origin: String,
}

impl WebConfig {
    /// Read `SKYCAST_ADDR` and `SKYCAST_ALLOWED_ORIGIN`, falling back to
    /// the development defaults (local port 5080, frontend on port 3000).
    pub fn from_env() -> Result<Self, WebError> {
        let addr = std::env::var("SKYCAST_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
        let origin = std::env::var("SKYCAST_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_owned());
        Self::from_parts(&addr, &origin)
    }

    pub fn from_parts(addr: &str, allowed_origin: &str) -> Result<Self, WebError> {
        let addr = addr.parse().map_err(|_| WebError::InvalidAddr {
            value: addr.to_owned(),
        })?;

        Ok(Self {
            addr,
            allowed_origin: allowed_origin.to_owned(),
        })
    }
}
