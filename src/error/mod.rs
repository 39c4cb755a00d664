//! Error types for barb.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! Three classes of failure:
//! - **Invalid argument**: an input fell outside one of the service's closed
//!   parameter sets. Always detected before any network I/O.
//! - **Transport**: the request never produced a usable body (timeout,
//!   connection failure, non-2xx status, undecodable payload).
//! - **Service**: the service answered successfully but reported an error of
//!   its own; the message is carried verbatim.

use thiserror::Error;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure, including service-reported errors
    GeneralError = 1,
    /// Input rejected before any request was made
    InvalidArgument = 2,
    /// Response body could not be decoded
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

// =============================================================================
// Error type
// =============================================================================

/// Main error type for barb operations.
#[derive(Error, Debug)]
pub enum BarbError {
    /// Request kind outside the service's closed set.
    #[error("invalid request kind '{0}' (valid: adjective, insult)")]
    InvalidRequestKind(String),

    /// Response format outside the service's closed set.
    #[error("invalid response format '{0}' (valid: html, json, txt)")]
    InvalidFormat(String),

    /// Language the service does not offer.
    #[error("unsupported language '{0}' (valid: en)")]
    InvalidLanguage(String),

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Network-level failure, including non-2xx responses.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded as requested.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// The service itself reported an error; message verbatim.
    #[error("service error: {0}")]
    Service(String),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BarbError {
    /// Map error to an exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidRequestKind(_) | Self::InvalidFormat(_) | Self::InvalidLanguage(_) => {
                ExitCode::InvalidArgument
            }

            Self::ParseResponse(_) => ExitCode::ParseError,

            Self::Timeout(_) => ExitCode::Timeout,

            Self::Network(_) | Self::Service(_) | Self::Json(_) | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// Returns whether the error is potentially recoverable by retrying.
    ///
    /// The service returns randomized content, so repeating a timed-out or
    /// dropped request is always safe.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }

    /// Returns whether the input was rejected before any network I/O.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequestKind(_) | Self::InvalidFormat(_) | Self::InvalidLanguage(_)
        )
    }
}

/// Result type alias for barb operations.
pub type Result<T> = std::result::Result<T, BarbError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_errors_map_to_usage_exit_code() {
        assert_eq!(
            BarbError::InvalidRequestKind("verb".to_string()).exit_code(),
            ExitCode::InvalidArgument
        );
        assert_eq!(
            BarbError::InvalidFormat("xml".to_string()).exit_code(),
            ExitCode::InvalidArgument
        );
        assert_eq!(
            BarbError::InvalidLanguage("fr".to_string()).exit_code(),
            ExitCode::InvalidArgument
        );
    }

    #[test]
    fn transport_errors_map_to_their_exit_codes() {
        assert_eq!(BarbError::Timeout(30).exit_code(), ExitCode::Timeout);
        assert_eq!(
            BarbError::Network("connection reset".to_string()).exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(
            BarbError::ParseResponse("not json".to_string()).exit_code(),
            ExitCode::ParseError
        );
    }

    #[test]
    fn service_error_maps_to_general_exit_code() {
        let err = BarbError::Service("unknown language".to_string());
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn retryable_classification() {
        assert!(BarbError::Timeout(30).is_retryable());
        assert!(BarbError::Network("reset".to_string()).is_retryable());

        assert!(!BarbError::InvalidFormat("xml".to_string()).is_retryable());
        assert!(!BarbError::Service("bad template".to_string()).is_retryable());
        assert!(!BarbError::ParseResponse("truncated".to_string()).is_retryable());
    }

    #[test]
    fn invalid_argument_classification() {
        assert!(BarbError::InvalidRequestKind("verb".to_string()).is_invalid_argument());
        assert!(BarbError::InvalidFormat("xml".to_string()).is_invalid_argument());
        assert!(BarbError::InvalidLanguage("fr".to_string()).is_invalid_argument());

        assert!(!BarbError::Network("reset".to_string()).is_invalid_argument());
        assert!(!BarbError::Service("oops".to_string()).is_invalid_argument());
    }

    #[test]
    fn display_messages_name_the_valid_sets() {
        let msg = BarbError::InvalidRequestKind("verb".to_string()).to_string();
        assert!(msg.contains("adjective") && msg.contains("insult"), "{msg}");

        let msg = BarbError::InvalidFormat("xml".to_string()).to_string();
        assert!(msg.contains("html") && msg.contains("json") && msg.contains("txt"), "{msg}");

        let msg = BarbError::InvalidLanguage("fr".to_string()).to_string();
        assert!(msg.contains("en"), "{msg}");
    }

    #[test]
    fn service_error_carries_message_verbatim() {
        let err = BarbError::Service("Template not found".to_string());
        assert_eq!(err.to_string(), "service error: Template not found");
    }

    #[test]
    fn exit_codes_convert_to_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::GeneralError), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgument), 2);
        assert_eq!(i32::from(ExitCode::ParseError), 3);
        assert_eq!(i32::from(ExitCode::Timeout), 4);
    }
}
