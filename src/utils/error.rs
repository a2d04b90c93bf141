use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilanError {
    #[error("Unknown rashi: '{value}'")]
    InvalidSign { value: String },

    #[error("Unknown nakshatra: '{value}'")]
    InvalidNakshatra { value: String },

    #[error("Compatibility score {value} is outside 0..={max}")]
    InvalidScore { value: u8, max: u8 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{service} responded with {status}: {message}")]
    RemoteError {
        service: String,
        status: u16,
        message: String,
    },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Authentication,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MilanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MilanError::InvalidSign { .. }
            | MilanError::InvalidNakshatra { .. }
            | MilanError::InvalidScore { .. }
            | MilanError::ValidationError { .. } => ErrorCategory::Input,
            MilanError::ApiError(_) | MilanError::RemoteError { .. } => ErrorCategory::Network,
            MilanError::AuthError { .. } => ErrorCategory::Authentication,
            MilanError::ConfigError { .. }
            | MilanError::ConfigValidationError { .. }
            | MilanError::InvalidConfigValueError { .. }
            | MilanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MilanError::IoError(_) | MilanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端服務暫時不可用，可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Authentication => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MilanError::InvalidSign { .. } => {
                "Use one of the 12 rashis, e.g. Mesha, Vrishabha ... Meena (English names also work)"
                    .to_string()
            }
            MilanError::InvalidNakshatra { .. } => {
                "Use one of the 27 nakshatras, e.g. Ashwini, Rohini, Purva Phalguni".to_string()
            }
            MilanError::InvalidScore { .. } => "Scores run from 0 to 36".to_string(),
            MilanError::ApiError(_) => {
                "Check that the content and auth services are running and reachable".to_string()
            }
            MilanError::RemoteError { status, .. } if *status >= 500 => {
                "The remote service failed; make sure its AI credentials are configured and try again"
                    .to_string()
            }
            MilanError::RemoteError { .. } => "Check the request values and try again".to_string(),
            MilanError::AuthError { .. } => {
                "Check your email/username and password, or register a new account".to_string()
            }
            MilanError::IoError(_) => "Check file paths and permissions".to_string(),
            MilanError::SerializationError(_) => {
                "The service returned an unexpected payload; check the service version".to_string()
            }
            MilanError::ConfigError { .. }
            | MilanError::ConfigValidationError { .. }
            | MilanError::InvalidConfigValueError { .. }
            | MilanError::MissingConfigError { .. } => {
                "Fix the configuration file or the matching command-line flag".to_string()
            }
            MilanError::ValidationError { .. } => "Correct the input and try again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MilanError::ApiError(e) if e.is_timeout() => "The service took too long to answer".to_string(),
            MilanError::ApiError(e) if e.is_connect() => "Could not connect to the service".to_string(),
            MilanError::RemoteError { service, status, .. } if *status >= 500 => {
                format!("{} is unavailable right now", service)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MilanError>;
