//! LLM backend errors
//!
//! This module defines BackendError, the transport-level failure type shared by
//! every `LLMClient` implementation.

use std::fmt;

/// Errors that can occur while talking to an LLM backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// API request failed with the given message
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// Authentication failed or credentials are invalid
    AuthenticationError { message: String },

    /// Request timed out after the specified duration (in seconds)
    TimeoutError { seconds: u64 },

    /// Rate limit exceeded, retry after the specified duration (in seconds)
    RateLimitError { retry_after: Option<u64> },

    /// The backend answered, but with something unusable
    InvalidResponse {
        message: String,
        raw_response: Option<String>,
    },

    /// Network-related error
    NetworkError { message: String },

    /// Generic error for other cases
    Other { message: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ApiError {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "API error ({}): {}", code, message)
                } else {
                    write!(f, "API error: {}", message)
                }
            }
            BackendError::AuthenticationError { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            BackendError::TimeoutError { seconds } => {
                write!(f, "Request timed out after {} seconds", seconds)
            }
            BackendError::RateLimitError { retry_after } => {
                if let Some(seconds) = retry_after {
                    write!(f, "Rate limit exceeded, retry after {} seconds", seconds)
                } else {
                    write!(f, "Rate limit exceeded")
                }
            }
            BackendError::InvalidResponse { message, .. } => {
                write!(f, "Invalid response from LLM: {}", message)
            }
            BackendError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            BackendError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_status_code() {
        let err = BackendError::ApiError {
            message: "bad request".to_string(),
            status_code: Some(400),
        };
        assert_eq!(err.to_string(), "API error (400): bad request");
    }

    #[test]
    fn test_display_rate_limit() {
        let err = BackendError::RateLimitError {
            retry_after: Some(30),
        };
        assert!(err.to_string().contains("retry after 30 seconds"));

        let err = BackendError::RateLimitError { retry_after: None };
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_display_timeout() {
        let err = BackendError::TimeoutError { seconds: 120 };
        assert_eq!(err.to_string(), "Request timed out after 120 seconds");
    }
}
