use thiserror::Error;

/// Failure to obtain any response from the contact endpoint.
///
/// A response with a non-success status is not a `TransportError`; it is
/// classified by the form controller like any other reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("contact request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid contact endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("contact endpoint unavailable: {0}")]
    Unavailable(String),
}
