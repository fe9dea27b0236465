// web_app/error.rs - Error taxonomy for the storefront client
//
// - ApiError: everything that can go wrong talking to the REST API
// - ActionError: the cloneable message carrier kept in view state

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connection, CORS...)
    #[error("Network error: {0}")]
    Transport(String),

    /// A non-2xx response; `message` is the server's message when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 404 for an unmatched slug or id
    #[error("{0} not found")]
    NotFound(String),

    /// A 2xx response whose envelope reported `success: false`
    #[error("{0}")]
    Rejected(String),

    /// The body was not the JSON shape we expected
    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Failure recorded by an async action
///
/// Any failure value is coerced into this type so view state can hold it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
    pub not_found: bool,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            not_found: false,
        }
    }
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        Self {
            not_found: err.is_not_found(),
            message: err.to_string(),
        }
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_server_message() {
        let err = ApiError::Http {
            status: 500,
            message: "Database unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn test_not_found_survives_coercion() {
        let action: ActionError = ApiError::NotFound("Product".to_string()).into();
        assert!(action.not_found);
        assert_eq!(action.message, "Product not found");
    }

    #[test]
    fn test_plain_values_coerce_to_action_error() {
        let from_str: ActionError = "boom".into();
        let from_string: ActionError = String::from("boom").into();
        let from_anyhow: ActionError = anyhow::anyhow!("boom").into();

        assert_eq!(from_str, from_string);
        assert_eq!(from_anyhow.message, "boom");
        assert!(!from_anyhow.not_found);
    }
}
