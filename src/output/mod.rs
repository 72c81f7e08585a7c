//! Output formatting and writing functionality

mod formatters;
mod writers;
mod progress;

pub use self::formatters::{format_duration, format_parameter, format_signature};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};
pub use self::progress::ProgressReporter;

use crate::error::Result;
use crate::models::analysis::AnalysisReport;
use crate::models::config::{OutputFormat, Settings};

/// Trait for different output formatters
pub trait Formatter {
    /// Format a documentation report into a string
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        if self.quiet {
            return Ok(formatters::format_summary_line(&report.summary));
        }

        let mut output = String::new();
        for file in &report.files {
            output.push_str(&formatters::format_file_text(file, self.use_colors, self.verbose));
        }
        output.push_str(&formatters::format_summary_text(report, self.use_colors));

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
    pub include_ast: bool,
    pub include_source: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter that leaves out syntax trees and sources
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            include_ast: false,
            include_source: false,
        }
    }

    /// Keep the annotated syntax tree of every file
    pub fn with_ast(mut self, include_ast: bool) -> Self {
        self.include_ast = include_ast;
        self
    }

    /// Keep the source text of every file
    pub fn with_source(mut self, include_source: bool) -> Self {
        self.include_source = include_source;
        self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output =
            formatters::format_report_json(report, self.include_ast, self.include_source, self.pretty)?;
        output.push('\n');
        Ok(output)
    }
}

/// Create the formatter selected by `settings`
pub fn create_formatter(settings: &Settings) -> Box<dyn Formatter> {
    match settings.output_format {
        OutputFormat::Text => Box::new(TextFormatter::new(
            settings.use_colors && settings.output_file.is_none(),
            settings.verbose,
            settings.quiet,
        )),
        OutputFormat::Json => Box::new(
            JsonFormatter::new(true)
                .with_ast(settings.include_ast)
                .with_source(settings.include_source),
        ),
    }
}
