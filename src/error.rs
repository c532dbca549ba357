//! Error types for Clubhouse API operations.

use thiserror::Error;

use crate::transport::BoxError;

/// Message used when a failed response carries no usable `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occured.";

/// Errors that can occur during Clubhouse API operations.
///
/// The first five variants are the API error family: exactly one of them is
/// returned for every non-2xx response, and their `Display` output is the
/// message reported by the API. Use [`ClubhouseError::is_api_error`] to catch
/// the whole family at once.
#[derive(Debug, Error)]
pub enum ClubhouseError {
    /// The referenced resource does not exist (HTTP 404).
    #[error("{message}")]
    ResourceNotExist { message: String },

    /// The request body did not match the schema expected by the API (HTTP 400).
    #[error("{message}")]
    SchemaMismatch { message: String },

    /// The request was well-formed but semantically invalid (HTTP 422).
    #[error("{message}")]
    Unprocessable { message: String },

    /// The rate limit was exceeded (HTTP 429).
    #[error("{message}")]
    TooManyRequest { message: String },

    /// Any other non-2xx response.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The base URL given at construction is not an absolute URL with a host.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Configuration is missing or incomplete.
    #[error("Clubhouse configuration required: {0}")]
    ConfigMissing(String),

    /// Request parameters could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Request data supplied on the command line is not valid JSON.
    #[error("Invalid --data JSON: {reason}")]
    InvalidData { reason: String },

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(BoxError),
}

impl ClubhouseError {
    /// Build the API error matching a non-2xx status code.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => Self::ResourceNotExist { message },
            400 => Self::SchemaMismatch { message },
            422 => Self::Unprocessable { message },
            429 => Self::TooManyRequest { message },
            status => Self::Api { status, message },
        }
    }

    /// Returns true for errors produced from a non-2xx API response.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        self.status_code().is_some()
    }

    /// Returns true for errors raised while building a client.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidBaseUrl { .. } | Self::ConfigMissing(_))
    }

    /// The HTTP status code behind an API error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ResourceNotExist { .. } => Some(404),
            Self::SchemaMismatch { .. } => Some(400),
            Self::Unprocessable { .. } => Some(422),
            Self::TooManyRequest { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message reported by the API, for API errors.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::ResourceNotExist { message }
            | Self::SchemaMismatch { message }
            | Self::Unprocessable { message }
            | Self::TooManyRequest { message }
            | Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for Clubhouse operations.
pub type Result<T> = core::result::Result<T, ClubhouseError>;
