//! Data models and structures for docwalk

pub mod analysis;
pub mod config;
pub mod descriptor;
pub mod doc;
pub mod file_graph;
pub mod syntax;

pub use analysis::{AnalysisReport, AnalysisSummary, FileDocumentation};
pub use config::Settings;
pub use descriptor::{ClassDescriptor, MethodDescriptor, ParameterDescriptor};
pub use doc::{DocComment, DocTag};
pub use file_graph::{FileGraph, SourceFile};
pub use syntax::{Comment, SyntaxNode};
