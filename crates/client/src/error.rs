//! Client error type.

/// Failure of a single API call.
///
/// Screens never show this to the user; they log it and display a fixed
/// per-action message instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body did not match the declared shape.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}
