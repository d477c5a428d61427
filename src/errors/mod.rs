//! Error handling module for the team directory core.
//!
//! Provides centralized error types with stable error codes.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
    pub const IMAGE_DECODE_ERROR: &str = "IMAGE_DECODE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Record or draft not found
    NotFound(String),
    /// Validation error at an edit boundary
    Validation(String),
    /// Key-value storage error
    Storage(String),
    /// JSON (de)serialization error
    Serialization(String),
    /// Image read/decode error
    ImageDecode(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Storage(_) => codes::STORAGE_ERROR,
            AppError::Serialization(_) => codes::SERIALIZATION_ERROR,
            AppError::ImageDecode(_) => codes::IMAGE_DECODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Storage(msg) => msg.clone(),
            AppError::Serialization(msg) => msg.clone(),
            AppError::ImageDecode(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}
