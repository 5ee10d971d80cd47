use crate::domain::ports::{FormRelay, RelayResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Posts form payloads with reqwest. No retry: one call, one request.
#[derive(Debug, Clone, Default)]
pub struct ReqwestRelay {
    client: Client,
}

impl ReqwestRelay {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Without a timeout the transport's own defaults apply.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl FormRelay for ReqwestRelay {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<RelayResponse> {
        tracing::debug!("Making relay request to: {}", endpoint);
        let response = self.client.post(endpoint).json(payload).send().await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Could not read relay response body: {}", err);
                String::new()
            }
        };

        Ok(RelayResponse {
            status: status.as_u16(),
            body,
        })
    }
}
