//! Error types for vaporiq-core
//!
//! One thiserror hierarchy for every operation, plus a load report so that
//! optional datasets can fail without taking the trend views down with them.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vaporiq operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Data Errors
    // ===================
    #[error("Malformed CSV row {line} in {path}: {message}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Invalid data: {message}")]
    Data { message: String },

    #[error("Unknown {kind}: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("No data available for {operation}")]
    EmptyData { operation: &'static str },

    #[error("Flavor '{flavor}' has no historical observations")]
    InsufficientData { flavor: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ===================
    // Dataset Lifecycle
    // ===================
    #[error("Dataset not loaded")]
    DatasetNotLoaded,

    #[error("Dataset already loaded (use reload to replace it)")]
    DatasetAlreadyLoaded,

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    pub(crate) fn data(message: impl Into<String>) -> Self {
        CoreError::Data {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Severity level for errors during load
///
/// Only optional tables are reported here; a failure that stops the load
/// comes back as `Err(CoreError)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Table absent, the view it feeds is disabled
    Warning,
    /// Table present but unreadable
    Error,
}

/// Individual error entry in load report
#[derive(Debug, Clone)]
pub struct LoadError {
    pub source: String,
    pub message: String,
    pub severity: ErrorSeverity,
    /// Actionable suggestion for user (optional)
    pub suggestion: Option<String>,
}

impl LoadError {
    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Error,
            suggestion: None,
        }
    }

    /// Add an actionable suggestion to this error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create user-friendly error from CoreError with context-aware suggestions
    pub fn from_core_error(source: impl Into<String>, error: &CoreError) -> Self {
        let source = source.into();
        let suggestion = match error {
            CoreError::FileNotFound { path } => {
                Some(format!("Check if file exists: ls {}", path.display()))
            }
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::CsvParse { path, line, .. } => Some(format!(
                "Inspect row: sed -n '{}p' {}",
                line,
                path.display()
            )),
            _ => None,
        };

        Self {
            source,
            message: error.to_string(),
            severity: ErrorSeverity::Error,
            suggestion,
        }
    }
}

/// Report of errors encountered during dataset loading
///
/// Trends are mandatory; users and rules may be missing, in which case the
/// quiz and compliance views degrade instead of failing the whole load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub errors: Vec<LoadError>,
    pub trends_loaded: bool,
    pub users_loaded: bool,
    pub rules_loaded: bool,
    pub observations: usize,
    pub flavors: usize,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: LoadError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors (including warnings)
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LoadError> {
        self.with_severity(ErrorSeverity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &LoadError> {
        self.with_severity(ErrorSeverity::Error)
    }

    /// Returns (warnings, errors)
    pub fn error_count(&self) -> (usize, usize) {
        (self.warnings().count(), self.errors().count())
    }

    fn with_severity(&self, severity: ErrorSeverity) -> impl Iterator<Item = &LoadError> {
        self.errors.iter().filter(move |e| e.severity == severity)
    }
}
