use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid argument '{field}' = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Session rejected by server ({status})")]
    Unauthorized { status: u16 },

    #[error("Invalid response from server: {message}")]
    InvalidResponse { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程式結束碼：可重試為 2，處理錯誤為 1，系統錯誤為 3
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl ClientError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigError { .. } => ErrorSeverity::High,
            // 網路或伺服器暫時性錯誤，可重試
            Self::Api(_) | Self::HttpStatus { .. } => ErrorSeverity::Medium,
            Self::Unauthorized { .. } | Self::InvalidResponse { .. } => ErrorSeverity::High,
            Self::Serialization(_) | Self::Csv(_) | Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            Self::Api(e) if e.is_timeout() => "The server did not respond in time".to_string(),
            Self::Api(_) => "Could not reach the server".to_string(),
            Self::HttpStatus { status, .. } => format!("The server returned an error ({})", status),
            Self::Unauthorized { .. } => "Your session is invalid or has expired".to_string(),
            Self::InvalidResponse { .. } => "The server returned an unexpected response".to_string(),
            Self::MissingConfigError { field } => format!("Missing configuration: {}", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Use an offset of 0 or more and a page size between 5 and 250"
            }
            Self::Api(_) | Self::HttpStatus { .. } => {
                "Check the endpoint and network connectivity, then retry"
            }
            Self::Unauthorized { .. } => "Sign in again and supply a fresh session token",
            Self::InvalidResponse { .. } => "Verify the endpoint points at a compatible server",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the configuration file and CLI flags",
            Self::Serialization(_) | Self::Csv(_) | Self::Io(_) => {
                "Check that the output destination is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
