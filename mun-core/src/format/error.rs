use core::fmt;

use serde::Deserialize;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum GenericError {
    Offline,
    TimeOut,
    ParsingError,
    MissingData,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum ApiError {
    Http { status: u16, message: Option<String> },
    Rejected(Option<String>),
    Other(GenericError),
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-2xx response. The body's `message` wins when it parses.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message
            .filter(|m| !m.is_empty());
        ApiError::Http { status, message }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected(Some(message.into()))
    }

    /// The backend's own message if it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(m), .. } | ApiError::Rejected(Some(m)) => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenericError::Offline => "Network error",
            GenericError::TimeOut => "Request timed out",
            GenericError::ParsingError => "Unexpected response from server",
            GenericError::MissingData => "Response did not contain any data",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { message: Some(m), .. } => write!(f, "{m}"),
            ApiError::Http { status, message: None } => write!(f, "HTTP error! status: {status}"),
            ApiError::Rejected(Some(m)) => write!(f, "{m}"),
            ApiError::Rejected(None) => write!(f, "Request was not successful"),
            ApiError::Other(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ApiError {}
