//! BackendClient - reqwest implementation of the backend ports.
//!
//! One request per user action, no automatic retries: recovery is
//! user-initiated, and superseded responses are discarded by the caller.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::domain::notification::NotificationAction;
use crate::domain::project::Project;
use crate::domain::quote::{Quote, QuoteSubmission};
use crate::ports::{
    GatewayError, NotificationBatch, NotificationGateway, ProjectReader, QuoteGateway,
};

use super::dto::{ApiEnvelope, NotificationActionRequest, SubmitQuoteRequest};

/// HTTP client for the backend collaborator.
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Creates a client with the configured timeout applied to every
    /// request.
    pub fn new(config: BackendConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key.expose_secret()),
            None => request,
        }
    }

    /// Sends a request, mapping transport failures to the gateway
    /// taxonomy.
    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        self.authorize(request).send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else if e.is_connect() {
                GatewayError::network(format!("Connection failed: {}", e))
            } else {
                GatewayError::network(e.to_string())
            }
        })
    }

    /// Checks the response status and decodes the body.
    async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Backend request failed");
            return Err(GatewayError::Status {
                code: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GatewayError::decode(e.to_string()))
    }
}

#[async_trait]
impl QuoteGateway for BackendClient {
    async fn submit_quote(&self, submission: &QuoteSubmission) -> Result<Quote, GatewayError> {
        let request = SubmitQuoteRequest::from(submission);
        tracing::debug!(service = %request.service, tier = %request.option, "Submitting quote");

        let response = self
            .send(self.http.post(self.url("/quotes")).json(&request))
            .await?;
        let envelope: ApiEnvelope<Quote> = Self::read_body(response).await?;
        envelope.into_result()
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, GatewayError> {
        let response = self.send(self.http.get(self.url("/quotes"))).await?;
        let envelope: ApiEnvelope<Vec<Quote>> = Self::read_body(response).await?;
        envelope.into_list()
    }
}

#[async_trait]
impl ProjectReader for BackendClient {
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        let response = self.send(self.http.get(self.url("/projects"))).await?;
        let envelope: ApiEnvelope<Vec<Project>> = Self::read_body(response).await?;
        envelope.into_list()
    }
}

#[async_trait]
impl NotificationGateway for BackendClient {
    async fn list_notifications(&self) -> Result<NotificationBatch, GatewayError> {
        let response = self.send(self.http.get(self.url("/notifications"))).await?;
        Self::read_body(response).await
    }

    async fn apply_action(
        &self,
        action: NotificationAction,
    ) -> Result<NotificationBatch, GatewayError> {
        let request = NotificationActionRequest::from(action);
        let response = self
            .send(self.http.post(self.url("/notifications")).json(&request))
            .await?;
        Self::read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_config() {
        let client = BackendClient::new(BackendConfig::new("https://api.example.test"));
        assert!(client.is_ok());
    }

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = BackendClient::new(BackendConfig::new("https://api.example.test/")).unwrap();
        assert_eq!(client.url("/quotes"), "https://api.example.test/quotes");

        let client = BackendClient::new(BackendConfig::new("https://api.example.test")).unwrap();
        assert_eq!(client.url("/projects"), "https://api.example.test/projects");
    }
}
