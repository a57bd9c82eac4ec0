use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch labor data")]
    StatusError { status: u16 },

    #[error("{0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl LoaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoaderError::HttpError(_) | LoaderError::StatusError { .. } => ErrorCategory::Network,
            LoaderError::ParseError(_) => ErrorCategory::Data,
            LoaderError::IoError(_) => ErrorCategory::Storage,
            LoaderError::TomlError(_)
            | LoaderError::ConfigError { .. }
            | LoaderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Fetch-side failures are recoverable: the loader answers them with the
    /// fallback page data.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LoaderError::HttpError(_) => "Could not reach the labor data source".to_string(),
            LoaderError::StatusError { status } => {
                format!("The labor data source answered with HTTP {}", status)
            }
            LoaderError::ParseError(_) => "The labor data document is not valid JSON".to_string(),
            LoaderError::IoError(e) => format!("Could not write the page data: {}", e),
            LoaderError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            LoaderError::ConfigError { message } => format!("Configuration problem: {}", message),
            LoaderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LoaderError::HttpError(_) => "Check network connectivity and the source URL",
            LoaderError::StatusError { .. } => "Verify that the source URL points to an existing document",
            LoaderError::ParseError(_) => "Inspect the source document; it must be valid JSON and not null",
            LoaderError::IoError(_) => "Make sure the output directory is writable",
            LoaderError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            LoaderError::ConfigError { .. } | LoaderError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file"
            }
        }
    }
}

impl ErrorSeverity {
    /// Process exit status for the CLI. `Low` errors never abort a run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
