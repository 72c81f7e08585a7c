//! Error handling for docwalk
//!
//! This module provides the error types, result alias and context utilities
//! used throughout the crate.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{CapturedBacktrace, DocwalkError, ErrorSeverity, Result};
