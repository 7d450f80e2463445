/// Errors that can occur while talking to the API or loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown generation: {0} (expected 1-9)")]
    UnknownGeneration(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error came from the network layer (transport failure
    /// or a non-success status) as opposed to a malformed body.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { .. })
    }
}
