use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandleError {
    #[error("Birthday should be in format 'YYYY-MM-DD'")]
    InvalidFormat,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

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
    Input,
    Configuration,
    System,
}

impl CandleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CandleError::InvalidFormat => ErrorCategory::Input,
            CandleError::ConfigError { .. }
            | CandleError::InvalidConfigValueError { .. }
            | CandleError::MissingConfigError { .. }
            | CandleError::CsvError(_) => ErrorCategory::Configuration,
            CandleError::IoError(_)
            | CandleError::SerializationError(_)
            | CandleError::ProcessingError { .. } => ErrorCategory::System,
        }
    }

    /// 依錯誤類別決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CandleError::InvalidFormat => "Write birthdays as zero-padded YYYY-MM-DD, e.g. 1981-01-14",
            CandleError::CsvError(_) => "Check that the CSV file has a 'name,birthday' header row",
            CandleError::IoError(_) => "Make sure the file exists and is readable",
            CandleError::SerializationError(_) | CandleError::ProcessingError { .. } => {
                "Try the text output format instead"
            }
            CandleError::ConfigError { .. } => "Make sure the people file is valid TOML",
            CandleError::InvalidConfigValueError { .. } => "Fix the highlighted value and try again",
            CandleError::MissingConfigError { .. } => "Provide the missing option on the command line",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CandleError::InvalidFormat => self.to_string(),
            CandleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            CandleError::MissingConfigError { field } => format!("'{}' is required", field),
            other => format!("Unable to compute candles: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CandleError>;
