//! Generation service failures.

use thiserror::Error;

use crate::traits::HttpError;

/// Any reason a generation request did not yield a usable batch.
///
/// The shell does not distinguish transient from permanent failures; every
/// variant is retryable on demand only.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// No API key was configured.
    #[error("no API key configured (set API_KEY or VITE_API_KEY)")]
    MissingApiKey,

    /// Transport failed before a response arrived.
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    /// The service answered with a non-2xx status.
    #[error("service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered without any candidate text.
    #[error("service returned no content")]
    EmptyResponse,

    /// Candidate text was not a valid question list.
    #[error("malformed quiz payload: {0}")]
    MalformedPayload(String),
}

impl GenerationError {
    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            GenerationError::MissingApiKey => "GEN_NO_KEY",
            GenerationError::Http(_) => "GEN_HTTP",
            GenerationError::Status { .. } => "GEN_STATUS",
            GenerationError::EmptyResponse => "GEN_EMPTY",
            GenerationError::MalformedPayload(_) => "GEN_MALFORMED",
        }
    }

    /// Message suitable for the mock exam's empty state.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::MissingApiKey => {
                "No API key configured. Set API_KEY and press r to retry.".to_string()
            }
            GenerationError::Http(_) | GenerationError::Status { .. } => {
                "Could not reach the question service. Press r to retry.".to_string()
            }
            GenerationError::EmptyResponse | GenerationError::MalformedPayload(_) => {
                "The question service sent an unusable set. Press r to retry.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::MalformedPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GenerationError::Status {
                status: 429,
                message: "quota".to_string()
            }
            .to_string(),
            "service returned status 429: quota"
        );
        assert_eq!(
            GenerationError::EmptyResponse.to_string(),
            "service returned no content"
        );
    }

    #[test]
    fn test_from_http_error() {
        let err: GenerationError = HttpError::Timeout("30s".to_string()).into();
        assert!(matches!(err, GenerationError::Http(_)));
        assert_eq!(err.error_code(), "GEN_HTTP");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err: GenerationError = json_err.into();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_every_variant_offers_retry() {
        let errors = vec![
            GenerationError::MissingApiKey,
            GenerationError::Http(HttpError::Other("reset".to_string())),
            GenerationError::Status {
                status: 500,
                message: String::new(),
            },
            GenerationError::EmptyResponse,
            GenerationError::MalformedPayload("x".to_string()),
        ];
        for err in errors {
            assert!(err.user_message().contains("retry"), "{:?}", err);
        }
    }
}
