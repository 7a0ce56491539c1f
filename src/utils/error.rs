use std::fmt;
use thiserror::Error;

/// 遠端服務回傳的錯誤 (唯一會被攔截並回報的錯誤類型)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub message: String,
    pub status_code: u16,
    pub error_code: String,
    pub request_id: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Service: AmazonSimpleDB; Status Code: {}; Error Code: {}; Request ID: {})",
            self.message, self.status_code, self.error_code, self.request_id
        )
    }
}

impl std::error::Error for ServiceError {}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed XML response: {message}")]
    Xml { message: String },

    #[error("Unable to load AWS credentials: {message}")]
    Credentials { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            DemoError::Service(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for DemoError {
    fn from(e: xmlparser::Error) -> Self {
        DemoError::Xml {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
