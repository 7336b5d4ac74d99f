use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} / {body}")]
    HttpError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("A generation request is already in flight")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Data,
    Configuration,
    Input,
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::ApiError(_) => ErrorCategory::Network,
            FormError::HttpError { .. } => ErrorCategory::Server,
            FormError::IoError(_) | FormError::SerializationError(_) => ErrorCategory::Data,
            FormError::ConfigError { .. } | FormError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FormError::ValidationError { .. } => ErrorCategory::Input,
            FormError::Busy => ErrorCategory::Concurrency,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FormError::Busy => ErrorSeverity::Low,
            FormError::ApiError(_) | FormError::HttpError { .. } => ErrorSeverity::Medium,
            FormError::ValidationError { .. } | FormError::SerializationError(_) => {
                ErrorSeverity::High
            }
            FormError::IoError(_)
            | FormError::ConfigError { .. }
            | FormError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the server is running and the base URL is reachable",
            ErrorCategory::Server => "The server rejected the request; check the server logs and try again",
            ErrorCategory::Data => "Check file permissions and that the archive file contains valid JSON",
            ErrorCategory::Configuration => "Review the --base-url flag or the TOML configuration file",
            ErrorCategory::Input => "Fill in the faculty, theme and length fields",
            ErrorCategory::Concurrency => "Wait for the pending request to finish",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::ApiError(_) => "Could not reach the plan server".to_string(),
            FormError::HttpError { status, .. } => {
                format!("The plan server answered with HTTP {}", status)
            }
            FormError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
