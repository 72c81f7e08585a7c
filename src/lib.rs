//! docwalk - API documentation extractor for JavaScript projects
//!
//! This library follows the local `require()` calls of an entry file to find
//! the sources of a project, attaches documentation comments to the syntax
//! tree of every file and describes the classes, methods and parameters each
//! file defines.
//!
//! ```no_run
//! use docwalk::SourceDocumentation;
//!
//! let mut documentation = SourceDocumentation::new("./my-project")?;
//! documentation.discover_source_files("index.js")?;
//! for file in documentation.analyze() {
//!     for class in &file.classes {
//!         println!("{}: {}", file.file_name.display(), class.name);
//!     }
//! }
//! # Ok::<(), docwalk::DocwalkError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::{ClassAnalyzer, DiscoveryOptions, SourceDiscovery, SourceDocumentation};
pub use error::{DocwalkError, ErrorSeverity, Result, ResultExt};
pub use models::{
    analysis::{AnalysisReport, AnalysisSummary, FileDocumentation},
    config::Settings,
    descriptor::{ClassDescriptor, MethodDescriptor, ParameterDescriptor, ParameterShape, ParameterValue},
    doc::{DocComment, DocTag},
    file_graph::{FileGraph, SourceFile},
    syntax::{Comment, MethodKind, NodeKind, Span, SyntaxNode},
};
pub use parsers::{CommentAttacher, SourceParser};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
