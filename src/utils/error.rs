use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Configuration missing: a value for '{field}' is required")]
    ConfigurationMissing { field: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Patron file \"{}\" not found", path.display())]
    InputFileNotFound { path: PathBuf },

    #[error("Patron file \"{}\" is missing required column '{column}'", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Patron file \"{}\" contains no records, output file will contain no data", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Failed to write output file \"{}\": {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigurationMissing { .. } | EtlError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::InputFileNotFound { .. }
            | EtlError::MissingColumn { .. }
            | EtlError::EmptyInput { .. }
            | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::OutputWriteFailure { .. } | EtlError::IoError(_) => ErrorCategory::Output,
            EtlError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::EmptyInput { .. } => ErrorSeverity::Low,
            EtlError::CsvError(_) | EtlError::SerializationError(_) => ErrorSeverity::Medium,
            EtlError::InputFileNotFound { .. }
            | EtlError::MissingColumn { .. }
            | EtlError::OutputWriteFailure { .. }
            | EtlError::IoError(_) => ErrorSeverity::High,
            EtlError::ConfigurationMissing { .. } | EtlError::InvalidConfigValue { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ConfigurationMissing { field } => {
                format!(".env file must contain a value for {}", field)
            }
            EtlError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            EtlError::InputFileNotFound { path } => {
                format!("Patron load file \"{}\" not found", path.display())
            }
            EtlError::MissingColumn { column, .. } => {
                format!("Patron load file has no '{}' column", column)
            }
            EtlError::OutputWriteFailure { path, .. } => {
                format!("Could not write load file \"{}\"", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set patronFileName, destinationFolder and logFileDirectory in the .env file or environment"
            }
            ErrorCategory::Input => {
                "Check that patronFileName points to a comma-delimited CSV with a header row"
            }
            ErrorCategory::Output => {
                "Check that destinationFolder exists and is writable"
            }
            ErrorCategory::Data => "Inspect the offending rows of the patron file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_critical() {
        let err = EtlError::ConfigurationMissing {
            field: "patronFileName".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
        assert!(err.user_friendly_message().contains("patronFileName"));
    }

    #[test]
    fn test_missing_input_exits_non_zero() {
        let err = EtlError::InputFileNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_ne!(err.severity().exit_code(), 0);
        assert_eq!(err.to_string(), "Patron file \"missing.csv\" not found");
    }

    #[test]
    fn test_empty_input_is_low_severity() {
        let err = EtlError::EmptyInput {
            path: PathBuf::from("patrons.csv"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.severity().exit_code(), 0);
    }

    #[test]
    fn test_output_failure_keeps_source() {
        let err = EtlError::OutputWriteFailure {
            path: PathBuf::from("out/patrons.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert!(std::error::Error::source(&err).is_some());
    }
}
