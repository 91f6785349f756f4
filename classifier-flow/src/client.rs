use crate::config::EndpointConfig;
use crate::error::{ClassifierError, Result};
use crate::traits::ClassifierClient;
use crate::types::{ClassificationRequest, ClassificationResponse};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Error body the backend sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of [`ClassifierClient`]
#[derive(Clone)]
pub struct HttpClassifierClient {
    client: Client,
    url: Url,
}

impl HttpClassifierClient {
    /// Create a new client for the configured endpoint
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let url = endpoint.url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = endpoint.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClassifierError::Network)?;

        Ok(Self { client, url })
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Equivalent curl invocation, for logging
    fn curl_command(&self, request: &ClassificationRequest) -> String {
        let body = serde_json::to_string(request).unwrap_or_default();
        format!(
            "curl -X POST -H 'Content-Type: application/json' -d '{}' '{}'",
            body.replace('\'', "'\\''"),
            self.url
        )
    }
}

impl ClassifierClient for HttpClassifierClient {
    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResponse> {
        tracing::debug!(curl = %self.curl_command(request), "sending classification request");

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(ClassifierError::Network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClassifierError::Network)?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|body| body.error);
            tracing::debug!(
                status = status.as_u16(),
                ?detail,
                "classification endpoint returned an error status"
            );
            return Err(ClassifierError::http_status(status.as_u16(), detail));
        }

        let parsed: ClassificationResponse = serde_json::from_slice(&body)
            .map_err(|e| ClassifierError::invalid_response(e.to_string()))?;

        tracing::debug!(
            intent = %parsed.intent,
            agent = %parsed.recommended_agent,
            "classification received"
        );
        Ok(parsed)
    }
}
