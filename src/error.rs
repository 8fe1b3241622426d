// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Failures reported by the remote profile, upload and category services.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, timeout, refused)
    Network(String),

    /// The server answered with a non-success status
    Status { code: u16, message: Option<String> },

    /// The response body did not match the expected shape
    Decode(String),

    /// A local file could not be read before sending
    Io(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error-api-network",
            ApiError::Status { code, .. } if *code == 401 || *code == 403 => {
                "error-api-unauthenticated"
            }
            ApiError::Status { .. } => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::Io(_) => "error-api-io",
        }
    }

    /// Message shown to the user below the form.
    ///
    /// Prefers the server-provided message and falls back to the display text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status {
                code,
                message: Some(msg),
            } => write!(f, "Server returned {}: {}", code, msg),
            ApiError::Status {
                code,
                message: None,
            } => write!(f, "Server returned {}", code),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                code: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_wraps_into_crate_error() {
        let err: Error = ApiError::Network("refused".into()).into();
        assert_eq!(format!("{}", err), "API Error: Network error: refused");
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Status {
            code: 422,
            message: Some("Email already taken".into()),
        };
        assert_eq!(err.user_message(), "Email already taken");
    }

    #[test]
    fn user_message_falls_back_to_display() {
        let err = ApiError::Status {
            code: 500,
            message: Some("   ".into()),
        };
        assert_eq!(err.user_message(), "Server returned 500:    ");

        let err = ApiError::Status {
            code: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Server returned 500");
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(
            ApiError::Network("x".into()).i18n_key(),
            "error-api-network"
        );
        assert_eq!(
            ApiError::Status {
                code: 401,
                message: None
            }
            .i18n_key(),
            "error-api-unauthenticated"
        );
        assert_eq!(
            ApiError::Status {
                code: 500,
                message: None
            }
            .i18n_key(),
            "error-api-status"
        );
        assert_eq!(ApiError::Decode("x".into()).i18n_key(), "error-api-decode");
    }
}
