//! Output writing functionality
//!
//! This module provides writers for different output destinations.

use crate::error::{Result, DocwalkError};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        print!("{}", content);
        io::stdout().flush().map_err(|e| DocwalkError::StdoutWrite {
            source: e,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: std::path::PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let write_error = |source| DocwalkError::OutputWrite {
            path: self.path.clone(),
            source,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        };

        let mut file = File::create(&self.path).map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote report");
        Ok(())
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}