//! Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

/// Default entry page behind the Fairy button.
pub const DEFAULT_FAIRY_URL: &str = "https://your-site.example/entry";

/// Default web altar behind the Altar button.
pub const DEFAULT_ALTAR_URL: &str = "https://your-site.example/altar";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address.
    pub bind_addr: SocketAddr,
    /// Endpoint mirrored offerings are posted to; `None` disables mirroring.
    pub altar_post_url: Option<String>,
    /// Per-delivery timeout for the mirror.
    pub altar_timeout: Duration,
    /// Entry page linked from `/fairy` and `/status`.
    pub fairy_url: String,
    /// Web altar linked from the submission replies.
    pub altar_url: String,
    /// Bot application id, used to build the invite link.
    pub application_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            altar_post_url: None,
            altar_timeout: Duration::from_secs(5),
            fairy_url: DEFAULT_FAIRY_URL.to_owned(),
            altar_url: DEFAULT_ALTAR_URL.to_owned(),
            application_id: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT`, `HOST` or `ALTAR_TIMEOUT_SECS`
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".to_owned())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;

        let timeout_secs: u64 = var("ALTAR_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_owned())
            .parse()
            .map_err(|e| AppError::Config(format!("ALTAR_TIMEOUT_SECS must be whole seconds: {e}")))?;
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "ALTAR_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            bind_addr,
            altar_post_url: var("ALTAR_POST_URL"),
            altar_timeout: Duration::from_secs(timeout_secs),
            fairy_url: var("FAIRY_URL").unwrap_or_else(|| DEFAULT_FAIRY_URL.to_owned()),
            altar_url: var("ALTAR_URL").unwrap_or_else(|| DEFAULT_ALTAR_URL.to_owned()),
            application_id: var("APPLICATION_ID"),
        })
    }
}
