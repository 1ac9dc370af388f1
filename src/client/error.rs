use reqwest::StatusCode;

/// Errors from talking to the vehicle service.
///
/// [`Request`](Self::Request) and [`Decode`](Self::Decode) are network
/// failures; [`Status`](Self::Status) means the service answered but refused.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response never arrived.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server responded with {0}")]
    Status(StatusCode),

    /// The response body was not the expected JSON.
    #[error("could not parse response: {0}")]
    Decode(#[source] reqwest::Error),
}
