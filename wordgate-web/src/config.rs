//! Server configuration loaded from environment variables.
//!
//! - `WORDGATE_BIND`: listen address (default `0.0.0.0:8080`)
//! - `WORDGATE_UPSTREAM_URL`: translation endpoint (default the public gtx endpoint)
//! - `WORDGATE_TIMEOUT_SECS`: outbound request timeout in seconds (default `10`)

use std::net::SocketAddr;
use std::time::Duration;
use wordgate::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, TranslateError, TranslateResult};

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub upstream_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> TranslateResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys fall back to
    /// defaults; present but invalid values are errors.
    pub fn from_lookup<F>(lookup: F) -> TranslateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("WORDGATE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|e| {
            TranslateError::Config(format!("WORDGATE_BIND '{}' is not an address: {}", bind_raw, e))
        })?;

        let upstream_url =
            lookup("WORDGATE_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match lookup("WORDGATE_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(TranslateError::Config(format!(
                        "WORDGATE_TIMEOUT_SECS '{}' must be a positive integer",
                        raw
                    )));
                }
            },
        };

        Ok(Self {
            bind,
            upstream_url,
            timeout,
        })
    }
}
