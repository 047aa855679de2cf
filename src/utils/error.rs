use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Environment variable '{name}' is not set")]
    MissingEnvVarError { name: String },

    #[error("Invalid person '{name}': {reasons}")]
    InvalidPersonError { name: String, reasons: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SieveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SieveError::IoError(_) => ErrorCategory::Io,
            SieveError::CsvError(_)
            | SieveError::SerializationError(_)
            | SieveError::TomlError(_) => ErrorCategory::Parsing,
            SieveError::InvalidConfigValueError { .. }
            | SieveError::MissingEnvVarError { .. } => ErrorCategory::Configuration,
            SieveError::InvalidPersonError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Parsing => ErrorSeverity::Critical,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error, by severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SieveError::IoError(_) => "Check that the file exists and is readable",
            SieveError::CsvError(_) => {
                "Make sure the CSV has a 'name,age,phone_number' header and numeric ages"
            }
            SieveError::SerializationError(_) => "Report the input that triggered this",
            SieveError::TomlError(_) => "Check the config file for TOML syntax errors",
            SieveError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and retry"
            }
            SieveError::MissingEnvVarError { .. } => {
                "Export the referenced environment variable or remove it from the config"
            }
            SieveError::InvalidPersonError { .. } => {
                "Use a non-empty name and an age below the configured maximum"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SieveError::IoError(e) => format!("Could not access a file: {}", e),
            SieveError::CsvError(e) => format!("Could not read the people file: {}", e),
            SieveError::TomlError(e) => format!("Could not parse the config file: {}", e),
            SieveError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SieveError>;
