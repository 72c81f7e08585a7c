//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for docwalk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory of the documented project
    pub project_root: PathBuf,

    /// Entry file, relative to the project root, whose dependencies are followed
    pub entry: Option<PathBuf>,

    /// Files registered without following their dependencies
    pub add_files: Vec<PathBuf>,

    /// Extension appended to module names that do not name a file
    pub extension: String,

    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether JSON output carries the annotated syntax tree of each file
    pub include_ast: bool,

    /// Whether JSON output carries the source text of each file
    pub include_source: bool,

    /// Whether to read files with non-blocking I/O
    pub use_async: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            entry: None,
            add_files: Vec::new(),
            extension: ".js".to_string(),
            output_format: OutputFormat::Text,
            output_file: None,
            include_ast: false,
            include_source: false,
            use_async: false,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub project_root: Option<PathBuf>,
    pub entry: Option<PathBuf>,
    pub add_files: Option<Vec<PathBuf>>,
    pub extension: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub include_ast: Option<bool>,
    pub include_source: Option<bool>,
    pub use_async: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.project_root.is_some() {
            self.project_root = other.project_root;
        }
        if other.entry.is_some() {
            self.entry = other.entry;
        }
        if other.add_files.is_some() {
            self.add_files = other.add_files;
        }
        if other.extension.is_some() {
            self.extension = other.extension;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.include_ast.is_some() {
            self.include_ast = other.include_ast;
        }
        if other.include_source.is_some() {
            self.include_source = other.include_source;
        }
        if other.use_async.is_some() {
            self.use_async = other.use_async;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(project_root) = &self.project_root {
            settings.project_root = project_root.clone();
        }
        if let Some(entry) = &self.entry {
            settings.entry = Some(entry.clone());
        }
        if let Some(add_files) = &self.add_files {
            settings.add_files = add_files.clone();
        }
        if let Some(extension) = &self.extension {
            settings.extension = extension.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(include_ast) = self.include_ast {
            settings.include_ast = include_ast;
        }
        if let Some(include_source) = self.include_source {
            settings.include_source = include_source;
        }
        if let Some(use_async) = self.use_async {
            settings.use_async = use_async;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
