use thiserror::Error;

/// Why a call to the demo API did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server rejected the request with status {status}")]
    ServerRejected { status: u16, reason: Option<String> },
    /// The server answered 2xx but the body was empty or not the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The request never completed: no connectivity, DNS, TLS, timeout.
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while building the shared client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}
