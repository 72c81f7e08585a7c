//! Error types and definitions for docwalk
//!
//! Invalid arguments and missing discovery roots surface to the caller. Everything
//! else that can go wrong while walking a project (unresolvable dependencies,
//! malformed doc comments, recoverable parse errors) is absorbed where it happens
//! and never becomes a `DocwalkError`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Backtrace captured when an error is created
///
/// Aliased so the derive does not wire it into the unstable `Error::provide`.
pub type CapturedBacktrace = std::backtrace::Backtrace;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for docwalk operations
#[derive(Debug, Error)]
pub enum DocwalkError {
    /// A required argument was missing or empty
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// The root file of a discovery request does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// A source file exists but could not be read
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        trace: CapturedBacktrace,
    },
}

impl DocwalkError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            DocwalkError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            DocwalkError::InvalidArgument { .. } => ErrorSeverity::Critical,
            DocwalkError::Config { .. } => ErrorSeverity::Critical,
            DocwalkError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            DocwalkError::ConfigRead { .. } => ErrorSeverity::Critical,
            DocwalkError::ConfigParse { .. } => ErrorSeverity::Critical,
            DocwalkError::StdoutWrite { .. } => ErrorSeverity::Critical,
            DocwalkError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DocwalkError::InvalidArgument { message, .. } => {
                format!("Invalid argument: {}", message)
            }
            DocwalkError::FileNotFound { path, .. } => {
                format!("Source file '{}' does not exist. Check the entry path and the project root.", path.display())
            }
            DocwalkError::FileRead { path, source, .. } => {
                format!("Could not read '{}': {}. Check that the file is readable text.", path.display(), source)
            }
            DocwalkError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            DocwalkError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            DocwalkError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid project root.", path.display())
            }
            DocwalkError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            DocwalkError::OutputDirectoryNotFound { path, .. } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Get the backtrace captured when this error was created
    #[cfg(not(tarpaulin_include))]
    pub fn backtrace(&self) -> Option<&std::backtrace::Backtrace> {
        let trace = match self {
            DocwalkError::InvalidArgument { trace, .. }
            | DocwalkError::FileNotFound { trace, .. }
            | DocwalkError::FileRead { trace, .. }
            | DocwalkError::Io { trace, .. }
            | DocwalkError::Config { trace, .. }
            | DocwalkError::PermissionDenied { trace, .. }
            | DocwalkError::InvalidPath { trace, .. }
            | DocwalkError::ConfigNotFound { trace, .. }
            | DocwalkError::ConfigRead { trace, .. }
            | DocwalkError::ConfigParse { trace, .. }
            | DocwalkError::OutputWrite { trace, .. }
            | DocwalkError::StdoutWrite { trace, .. }
            | DocwalkError::JsonSerialize { trace, .. }
            | DocwalkError::OutputDirectoryNotFound { trace, .. } => trace,
        };

        match trace.status() {
            std::backtrace::BacktraceStatus::Captured => Some(trace),
            _ => None,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DocwalkError::InvalidArgument {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a not-found error for a discovery root
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        DocwalkError::FileNotFound {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Map an IO error raised while reading a source file
    ///
    /// `NotFound` becomes [`DocwalkError::FileNotFound`] and `PermissionDenied`
    /// becomes [`DocwalkError::PermissionDenied`]; everything else is a read error.
    pub fn file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => DocwalkError::FileRead {
                path,
                source,
                #[cfg(not(tarpaulin_include))]
                trace: std::backtrace::Backtrace::capture(),
            },
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        DocwalkError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        DocwalkError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        DocwalkError::PermissionDenied {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for DocwalkError {
    fn from(err: std::io::Error) -> Self {
        DocwalkError::io_error(err)
    }
}

impl From<serde_json::Error> for DocwalkError {
    fn from(err: serde_json::Error) -> Self {
        DocwalkError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Result type alias for docwalk operations
pub type Result<T> = std::result::Result<T, DocwalkError>;
