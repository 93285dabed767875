use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::IoError(_) => ErrorCategory::Io,
            ScanError::CsvError(_) | ScanError::SerializationError(_) => {
                ErrorCategory::Serialization
            }
            ScanError::ConfigValidationError { .. }
            | ScanError::InvalidConfigValueError { .. }
            | ScanError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤類型給出處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            ScanError::CsvError(_) | ScanError::SerializationError(_) => {
                "Try a different output format or report this as a bug"
            }
            ScanError::ConfigValidationError { .. } => {
                "Check the TOML syntax and field names in the configuration file"
            }
            ScanError::InvalidConfigValueError { .. } => {
                "Fix the offending value and run again"
            }
            ScanError::MissingConfigError { .. } => {
                "Add the missing field to the configuration"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::IoError(e) => format!("Could not read or write a file: {}", e),
            ScanError::CsvError(e) => format!("Could not write CSV output: {}", e),
            ScanError::SerializationError(e) => format!("Could not write JSON output: {}", e),
            ScanError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ScanError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            ScanError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
        }
    }

    /// 依嚴重程度對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
