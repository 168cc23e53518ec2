use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("QR code generation failed: {0}")]
    QrCodeError(#[from] qrcode::types::QrError),

    #[error("Invalid extraction pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid visitor input '{field}': '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Visitor information incomplete: {}", .errors.join(" "))]
    ExtractionError { errors: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PassError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PassError::InvalidInputError { .. } | PassError::ExtractionError { .. } => {
                ErrorCategory::Input
            }
            PassError::ConfigParseError { .. }
            | PassError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PassError::IoError(_) => ErrorCategory::Storage,
            PassError::CsvError(_)
            | PassError::SerializationError(_)
            | PassError::QrCodeError(_)
            | PassError::PatternError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PassError::InvalidInputError { field, reason, .. } => {
                format!("The '{}' field could not be accepted: {}", field, reason)
            }
            PassError::ExtractionError { errors } => {
                format!("Visitor information could not be read: {}", errors.join(" "))
            }
            PassError::ConfigParseError { .. } => "The configuration file is not valid TOML".to_string(),
            PassError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PassError::IoError(e) => format!("File access failed: {}", e),
            PassError::CsvError(e) => format!("Visitor CSV could not be processed: {}", e),
            PassError::SerializationError(e) => format!("Pass report could not be serialized: {}", e),
            PassError::QrCodeError(e) => format!("Pass QR code could not be generated: {}", e),
            PassError::PatternError(e) => format!("Extraction pattern is invalid: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PassError::InvalidInputError { .. } => {
                "Enter the date of birth as YYYY-MM-DD and make sure it is not in the future"
            }
            PassError::ExtractionError { .. } => {
                "Make sure the text has 'Name:', 'Date of Visit:', 'Purpose:' and 'Date of Birth:' lines"
            }
            PassError::ConfigParseError { .. } => "Check the TOML syntax of the configuration file",
            PassError::InvalidConfigValueError { .. } => "Fix the reported configuration value and run again",
            PassError::IoError(_) => "Check that the path exists and is readable/writable",
            PassError::CsvError(_) => "Make sure the input CSV has 'name' and 'dob' header columns",
            PassError::SerializationError(_) => "Try a different output format",
            PassError::QrCodeError(_) => "Shorten the visitor name; the QR payload is too long",
            PassError::PatternError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, PassError>;
