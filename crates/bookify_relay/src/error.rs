// --- File: crates/bookify_relay/src/error.rs ---
use bookify_common::BookifyError;
use thiserror::Error;

const SERVICE_NAME: &str = "mail relay";

/// Mail relay specific error types.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request could not be sent or no response arrived
    #[error("Mail relay request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("Mail relay returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete relay configuration
    #[error("Mail relay configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl From<RelayError> for BookifyError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::RequestError(e) if e.is_timeout() => {
                BookifyError::TimeoutError(format!("{}: {}", SERVICE_NAME, e))
            }
            RelayError::RequestError(e) => BookifyError::ExternalServiceError {
                service_name: SERVICE_NAME.to_string(),
                message: e.to_string(),
            },
            RelayError::ApiError {
                status_code,
                message,
            } => BookifyError::ExternalServiceError {
                service_name: SERVICE_NAME.to_string(),
                message: format!("status {}: {}", status_code, message),
            },
            RelayError::ConfigError(message) => BookifyError::ConfigError(message),
        }
    }
}
