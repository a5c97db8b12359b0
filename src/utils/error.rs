use crate::domain::model::{DimensionField, PackageType};
use thiserror::Error;

pub const GENERIC_RESPONSE_ERROR: &str = "An error occurred in the response";
pub const NO_DATA_IN_RESPONSE: &str = "no data in response";

#[derive(Error, Debug)]
pub enum RatesError {
    #[error(
        "{package_type} {} ({}) must be at least {minimum} inches, got {actual}",
        .field.label(),
        .field.as_str()
    )]
    Validation {
        package_type: PackageType,
        field: DimensionField,
        minimum: f64,
        actual: f64,
    },

    #[error("rates endpoint returned HTTP {status}")]
    Transport { status: u16 },

    #[error("{message}")]
    Application { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("unknown {kind} '{value}'")]
    UnknownKey { kind: &'static str, value: String },
}

/// 錯誤分類，供呼叫端決定如何回報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Application,
    Config,
}

impl RatesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatesError::Validation { .. } => ErrorKind::Validation,
            RatesError::Transport { .. } | RatesError::Http(_) => ErrorKind::Transport,
            RatesError::Application { .. } | RatesError::Decode(_) => ErrorKind::Application,
            RatesError::Io(_)
            | RatesError::Config { .. }
            | RatesError::InvalidConfigValue { .. }
            | RatesError::UnknownKey { .. } => ErrorKind::Config,
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        RatesError::Application {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RatesError::Validation { .. } => format!("Package dimensions rejected: {}", self),
            RatesError::Transport { status } => {
                format!("The rates service is unavailable (HTTP {})", status)
            }
            RatesError::Http(_) => "Could not reach the rates service".to_string(),
            RatesError::Application { message } => format!("The rates service said: {}", message),
            RatesError::Decode(_) => "The rates service sent a response we could not read".to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RatesError>;
