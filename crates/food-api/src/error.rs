//! API Errors

use thiserror::Error;

/// Failures surfaced by a [`FoodApi`](crate::FoodApi) call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (network unreachable, CORS, aborted)
    #[error("network error: {0}")]
    Transport(String),
    /// Server answered with a non-success status
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// Request body could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// Response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn not_found(id: crate::FoodId) -> Self {
        ApiError::Status {
            status: 404,
            status_text: format!("food {} not found", id),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "network error: connection refused");

        let error = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(error.to_string(), "server responded 500 Internal Server Error");

        let error = ApiError::Decode("expected array".to_string());
        assert_eq!(error.to_string(), "failed to decode response: expected array");
    }

    #[test]
    fn test_not_found_is_status_error() {
        assert!(matches!(
            ApiError::not_found(9),
            ApiError::Status { status: 404, .. }
        ));
    }
}
