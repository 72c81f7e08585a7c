//! Core functionality for source discovery and documentation extraction

pub mod discovery;
pub mod documentation;
pub mod extractor;

pub use discovery::{DiscoveryOptions, SourceDiscovery};
pub use documentation::SourceDocumentation;
pub use extractor::ClassAnalyzer;
