use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{domain::FormSubmission, protocol::CONTACT_PATH};
use tracing::debug;
use url::Url;

use crate::error::TransportError;

/// Raw reply from the contact endpoint, before any classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Sends one submission. Exactly one request per call, no retries.
    async fn post_contact(
        &self,
        submission: &FormSubmission,
    ) -> Result<TransportResponse, TransportError>;
}

/// Stand-in used when no endpoint has been configured.
pub struct MissingContactTransport;

#[async_trait]
impl ContactTransport for MissingContactTransport {
    async fn post_contact(
        &self,
        _submission: &FormSubmission,
    ) -> Result<TransportResponse, TransportError> {
        Err(TransportError::Unavailable(
            "no contact endpoint configured".to_string(),
        ))
    }
}

pub struct HttpContactTransport {
    http: Client,
    endpoint: Url,
}

impl HttpContactTransport {
    /// Targets `<server_url>/api/contact`.
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        Self::with_path(server_url, CONTACT_PATH)
    }

    pub fn with_path(server_url: &str, contact_path: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(server_url)?.join(contact_path)?;
        Ok(Self::with_client(Client::new(), endpoint))
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post_contact(
        &self,
        submission: &FormSubmission,
    ) -> Result<TransportResponse, TransportError> {
        debug!(
            endpoint = %self.endpoint,
            fields = submission.len(),
            "posting contact submission"
        );
        let res = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(submission)
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
