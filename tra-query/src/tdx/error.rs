//! TDX client error types.

/// Errors from the TDX HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TdxError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials rejected, or the API requires a token we don't have
    #[error("unauthorized: check TDX_CLIENT_ID and TDX_CLIENT_SECRET")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by TDX API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
