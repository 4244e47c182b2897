//! `reqwest` implementation of the `OfferingSink` trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use coven_core::mirror::{MirrorError, MirroredOffering, OfferingSink};

/// Default request timeout for a single mirror delivery.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts each offering as JSON to a fixed altar URL.
#[derive(Debug, Clone)]
pub struct HttpAltarSink {
    client: Client,
    url: String,
}

impl HttpAltarSink {
    /// Creates a sink posting to `url`, giving up on a delivery after
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The altar URL offerings are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl OfferingSink for HttpAltarSink {
    async fn deliver(&self, offering: &MirroredOffering) -> Result<(), MirrorError> {
        let response = self
            .client
            .post(&self.url)
            .json(offering)
            .send()
            .await
            .map_err(|e| MirrorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(url = %self.url, status = status.as_u16(), "altar accepted offering");
        Ok(())
    }
}
