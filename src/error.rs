//! Cart Errors
//!
//! Failures of a cart API call. None of these escape the cart client; they
//! end up as an error toast and a `false`/empty return.

/// Failure of a single cart request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    /// fetch rejected or the response body could not be read
    #[error("network error: {0}")]
    Network(String),
    /// non-2xx status or `success: false`
    #[error("server rejected request (status {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },
    /// body was not the expected JSON
    #[error("malformed response: {0}")]
    Parse(String),
}

impl CartError {
    /// Text for the error toast. `action` names the failed operation,
    /// e.g. "Failed to add to cart".
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Network(_) => "Network error. Please try again.".to_string(),
            Self::Server { status: Some(_), message } => {
                format!("{}: {}", action, message.as_deref().unwrap_or("Unknown error"))
            }
            Self::Server { status: None, message } => message.clone().unwrap_or_else(|| action.to_string()),
            Self::Parse(_) => action.to_string(),
        }
    }
}

/// Bootstrap configuration could not be read
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no window")]
    NoWindow,
    #[error("invalid config: {0}")]
    Invalid(String),
}
