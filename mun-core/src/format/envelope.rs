use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::error::{ApiError, GenericError};

/// `{ "success": bool, "data": T, "message": string }`, the shape every endpoint answers with.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message));
        }
        self.data.ok_or(ApiError::Other(GenericError::MissingData))
    }

    /// For writes whose payload the caller does not need.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|_| ApiError::Other(GenericError::ParsingError))
    }
}
