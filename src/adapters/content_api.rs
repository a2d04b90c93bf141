use crate::adapters::http::{build_client, join_url, remote_error};
use crate::domain::model::{CompatibilityEnvelope, CompatibilityReading, CompatibilityRequest};
use crate::domain::ports::{ConfigProvider, InterpretationService};
use crate::domain::session::Session;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

pub const COMPATIBILITY_PATH: &str = "/api/v1/ai/compatibility";
const SERVICE_NAME: &str = "content API";

/// Client for the content/AI service.
#[derive(Debug, Clone)]
pub struct ContentApiClient {
    base_url: String,
    client: Client,
}

impl ContentApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self {
            base_url: config.content_api_url().to_string(),
            client: build_client(config.request_timeout())?,
        })
    }
}

#[async_trait]
impl InterpretationService for ContentApiClient {
    async fn compatibility_reading(
        &self,
        session: &Session,
        request: &CompatibilityRequest,
    ) -> Result<CompatibilityReading> {
        let url = join_url(&self.base_url, COMPATIBILITY_PATH);
        tracing::debug!("POST {}", url);

        let mut builder = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(authorization) = session.authorization() {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = builder.send().await?;
        tracing::debug!("Content API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(remote_error(SERVICE_NAME, response).await);
        }

        let envelope: CompatibilityEnvelope = response.json().await?;
        if let Some(echoed) = envelope.score {
            if echoed != request.score.value() {
                tracing::warn!(
                    "Content API echoed score {} but {} was sent",
                    echoed,
                    request.score.value()
                );
            }
        }
        if !envelope.success {
            tracing::warn!("Content API reply did not set success=true");
        }

        Ok(envelope.reading)
    }
}
