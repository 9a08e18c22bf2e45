use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Output error: {message}")]
    OutputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl PuzzleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PuzzleError::ConfigParseError { .. } | PuzzleError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PuzzleError::IoError(_)
            | PuzzleError::CsvError(_)
            | PuzzleError::SerializationError(_)
            | PuzzleError::OutputError { .. } => ErrorCategory::Output,
        }
    }

    /// 配置錯誤需要使用者介入，輸出錯誤通常重試即可
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
        }
    }

    /// 對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PuzzleError::ConfigParseError { path, .. } => {
                format!("Could not read configuration file '{}'", path)
            }
            PuzzleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PuzzleError::IoError(e) => format!("File system error: {}", e),
            PuzzleError::CsvError(_) => "Failed to write CSV output".to_string(),
            PuzzleError::SerializationError(_) => "Failed to write JSON output".to_string(),
            PuzzleError::OutputError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PuzzleError::ConfigParseError { .. } => {
                "Check that the file exists and is valid TOML"
            }
            PuzzleError::InvalidConfigValueError { .. } => {
                "Fix the value in the [puzzle] or [output] section, or drop it to use the default"
            }
            PuzzleError::IoError(_) => "Check that the output directory is writable",
            PuzzleError::CsvError(_) | PuzzleError::SerializationError(_) => {
                "Try another output format with --format"
            }
            PuzzleError::OutputError { .. } => "Check the --output path",
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = PuzzleError::InvalidConfigValueError {
            field: "puzzle.hen_price".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("puzzle.hen_price"));
    }

    #[test]
    fn test_io_errors_map_to_output_category() {
        let err: PuzzleError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("IO error"));
    }
}
