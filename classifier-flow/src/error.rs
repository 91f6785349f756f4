use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for classifier-flow operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Error types for the classification flow
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Please enter a customer message")]
    EmptyMessage,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP error! status: {status}{}", format_detail(.detail))]
    HttpStatus {
        status: u16,
        detail: Option<String>,
    },

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

/// Coarse classification of a [`ClassifierError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any request was sent
    Validation,
    /// Network failure or non-2xx status
    Transport,
    /// Response body could not be understood
    Parse,
    /// Configuration could not be loaded or is invalid
    Config,
    Other,
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(text) if !text.trim().is_empty() => format!(" ({})", text.trim()),
        _ => String::new(),
    }
}

impl ClassifierError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn http_status(status: u16, detail: Option<String>) -> Self {
        Self::HttpStatus { status, detail }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyMessage => ErrorKind::Validation,
            Self::Network(_) | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::InvalidResponse { .. } => ErrorKind::Parse,
            Self::Io(_)
            | Self::ConfigParse(_)
            | Self::UrlParse(_)
            | Self::ConfigNotFound { .. }
            | Self::InvalidConfig { .. } => ErrorKind::Config,
            Self::General { .. } => ErrorKind::Other,
        }
    }
}
