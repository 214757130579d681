use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV record on line {line} has {found} fields, expected {expected}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid {field} '{value}' on line {line}: {source}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Invalid {field} '{value}' on line {line}: value out of range")]
    NumberOutOfRange {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("CSV quoting error on line {line}: {reason}")]
    Quote { line: u64, reason: &'static str },

    #[error("No records found in input")]
    EmptyResult,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Decode,
    Data,
    Configuration,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::FileOpen { .. } | ReportError::UnsupportedFormat { .. } => {
                ErrorCategory::Input
            }
            ReportError::Json(_)
            | ReportError::Csv(_)
            | ReportError::FieldCount { .. }
            | ReportError::InvalidNumber { .. }
            | ReportError::NumberOutOfRange { .. }
            | ReportError::Quote { .. } => ErrorCategory::Decode,
            ReportError::EmptyResult => ErrorCategory::Data,
            ReportError::Config { .. } | ReportError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Decode => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Data => 3,
        }
    }

    pub fn is_decode_error(&self) -> bool {
        self.category() == ErrorCategory::Decode
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::FileOpen { path, source } => {
                format!("Could not open file '{}': {}", path.display(), source)
            }
            ReportError::UnsupportedFormat { extension } => {
                format!("Unsupported file format '{}'. Use a .csv or .json file.", extension)
            }
            ReportError::EmptyResult => "The input file contains no products.".to_string(),
            other if other.is_decode_error() => format!("Error reading file: {}", other),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
