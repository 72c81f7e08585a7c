//! Error context utilities for docwalk
//!
//! Attaches the path an IO operation worked on to its error.

use std::io;
use std::path::Path;
use crate::error::{Result, DocwalkError};

/// Extension trait for IO results to add the affected path to errors
pub trait ResultExt<T> {
    /// Map `NotFound` and `PermissionDenied` to path-carrying errors
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, io::Error> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => DocwalkError::permission_denied(path.as_ref()),
            io::ErrorKind::NotFound => DocwalkError::file_not_found(path.as_ref()),
            _ => DocwalkError::io_error(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_file_context_not_found() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(
            io::ErrorKind::NotFound,
            "file not found",
        ));

        match result.with_file_context("src/missing.js") {
            Err(DocwalkError::FileNotFound { path, .. }) => {
                assert_eq!(path.to_string_lossy(), "src/missing.js");
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_permission_denied() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));

        match result.with_file_context("test/path") {
            Err(DocwalkError::PermissionDenied { path, .. }) => {
                assert_eq!(path.to_string_lossy(), "test/path");
            }
            other => panic!("Expected PermissionDenied error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_other_errors() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(
            io::ErrorKind::Other,
            "disk on fire",
        ));

        match result.with_file_context(".docwalk.toml") {
            Err(DocwalkError::Io { source, .. }) => {
                assert_eq!(source.to_string(), "disk on fire");
            }
            other => panic!("Expected Io error, got {:?}", other),
        }

        let fine: std::result::Result<u8, io::Error> = Ok(7);
        assert_eq!(fine.with_file_context("a.js").unwrap(), 7);
    }
}
