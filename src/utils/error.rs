use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetReportError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out")]
    TimeoutError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Response from {url} is not a list of pet owners: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Transform error: {message}")]
    TransformError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with an error of this severity; never 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PetReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                ErrorCategory::Configuration
            }
            Self::TransportError { .. } | Self::TimeoutError { .. } | Self::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            Self::DecodeError { .. } | Self::TransformError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Data
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 暫時性錯誤，重試可能成功
            Self::TransportError { .. } | Self::TimeoutError { .. } => ErrorSeverity::Medium,
            Self::HttpStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::TransformError { .. } => ErrorSeverity::Low,
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Fetch-stage failures abort the run without producing a report.
    pub fn is_fetch_stage(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::TransportError { .. }
                | Self::TimeoutError { .. }
                | Self::HttpStatusError { .. }
                | Self::DecodeError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::TransportError { url, .. } => format!("Could not reach the pet owner API at {}", url),
            Self::TimeoutError { url, .. } => format!("The pet owner API at {} did not answer in time", url),
            Self::HttpStatusError { url, status } => {
                format!("The pet owner API at {} answered with HTTP {}", url, status)
            }
            Self::DecodeError { url, .. } => {
                format!("The data returned by {} is not a list of pet owners", url)
            }
            Self::TransformError { message } => format!("Could not build the report: {}", message),
            Self::IoError(e) => format!("Could not write output: {}", e),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. } => {
                "Set source.endpoint in the configuration file or pass --api-endpoint"
            }
            Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                "Check the configuration file and command-line overrides"
            }
            Self::TransportError { .. } => "Check your network connection and the API endpoint",
            Self::TimeoutError { .. } => "Retry later or raise source.timeout_seconds",
            Self::HttpStatusError { .. } => "Verify the endpoint URL and that the API is available",
            Self::DecodeError { .. } => "Make sure the endpoint returns a JSON array of pet owners",
            Self::TransformError { .. } => "Re-run with --verbose and inspect the logged payload",
            Self::IoError(_) | Self::SerializationError(_) => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PetReportError>;
