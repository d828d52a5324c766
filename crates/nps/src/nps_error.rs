/// Errors raised while fetching or decoding NPS data
#[derive(thiserror::Error, Debug)]
pub enum NpsError {
    /// Non-success response from the API
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Rate limited by the API
    #[error("Rate limited by the NPS API: {body}")]
    RateLimited {
        /// Response body, possibly empty
        body: String,
    },

    /// API key missing or rejected
    #[error("Authentication failed with the NPS API (HTTP {status}): {body}")]
    AuthenticationFailed {
        /// Response status code, 401 or 403
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Transport failure before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be decoded
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// HTTP client could not be configured
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl NpsError {
    /// HTTP status associated with the failure, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            NpsError::Http { status, .. } | NpsError::AuthenticationFailed { status, .. } => {
                Some(*status)
            }
            NpsError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Response body associated with the failure, if one was received
    pub fn response(&self) -> Option<&str> {
        match self {
            NpsError::Http { body, .. }
            | NpsError::AuthenticationFailed { body, .. }
            | NpsError::RateLimited { body } => Some(body.as_str()),
            _ => None,
        }
    }
}
