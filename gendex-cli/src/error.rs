use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// API request, decode or settings failure from the library
    #[error("{0}")]
    Api(#[from] gendex_api::ApiError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Species not found in the selected generation
    #[error("{0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
