//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{DocwalkError, Result};
use crate::models::analysis::{AnalysisReport, AnalysisSummary, FileDocumentation};
use crate::models::descriptor::{ClassDescriptor, MethodDescriptor, ParameterDescriptor, ParameterShape};
use crate::models::syntax::MethodKind;
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;
use serde_json::Value;
use std::time::Duration;

/// Paint `text` with `style` when colors are enabled
fn paint(use_colors: bool, style: Style, text: impl AsRef<str>) -> String {
    if use_colors {
        style.paint(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

/// First line of a description, used where one line is all there is room for
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

/// Render one parameter the way it appears in a signature
pub fn format_parameter(parameter: &ParameterDescriptor) -> String {
    let mut text = String::new();
    if parameter.is_rest {
        text.push_str("...");
    }

    let bindings = |open: char, close: char| {
        let values: Vec<String> = parameter
            .values
            .iter()
            .map(|value| {
                let mut binding = String::new();
                if value.is_rest {
                    binding.push_str("...");
                }
                binding.push_str(&value.name);
                if let Some(default_value) = &value.default_value {
                    binding.push_str(" = ");
                    binding.push_str(default_value);
                }
                binding
            })
            .collect();
        format!("{}{}{}", open, values.join(", "), close)
    };

    match parameter.shape {
        ParameterShape::Simple => text.push_str(parameter.name.as_deref().unwrap_or("_")),
        ParameterShape::Object => text.push_str(&bindings('{', '}')),
        ParameterShape::Array => text.push_str(&bindings('[', ']')),
    }

    if let Some(default_value) = &parameter.default_value {
        text.push_str(" = ");
        text.push_str(default_value);
    }

    text
}

/// Render the signature of a method, e.g. `static async load(path, {cache = true} = {})`
pub fn format_signature(method: &MethodDescriptor) -> String {
    let mut signature = String::new();
    if method.is_static {
        signature.push_str("static ");
    }
    if method.is_async {
        signature.push_str("async ");
    }
    match method.kind {
        MethodKind::Get => signature.push_str("get "),
        MethodKind::Set => signature.push_str("set "),
        MethodKind::Constructor | MethodKind::Method => {}
    }

    let parameters: Vec<String> = method.parameters.iter().map(format_parameter).collect();
    signature.push_str(&format!("{}({})", method.name, parameters.join(", ")));
    signature
}

fn format_method_text(method: &MethodDescriptor, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let signature = paint(use_colors, Cyan.normal(), format_signature(method));
    match method.description() {
        Some(description) => output.push_str(&format!("    {} - {}\n", signature, first_line(description))),
        None => output.push_str(&format!("    {}\n", signature)),
    }

    if verbose {
        for parameter in &method.parameters {
            let name = parameter.name.as_deref().unwrap_or("(destructured)");
            output.push_str(&format!(
                "      {}{}{}\n",
                name,
                parameter
                    .type_name
                    .as_deref()
                    .map(|type_name| format!(" {{{}}}", type_name))
                    .unwrap_or_default(),
                parameter
                    .description
                    .as_deref()
                    .map(|description| format!(" - {}", first_line(description)))
                    .unwrap_or_default(),
            ));

            for value in &parameter.values {
                output.push_str(&format!(
                    "        .{}{}{}\n",
                    value.name,
                    value
                        .type_name
                        .as_deref()
                        .map(|type_name| format!(" {{{}}}", type_name))
                        .unwrap_or_default(),
                    value
                        .description
                        .as_deref()
                        .map(|description| format!(" - {}", first_line(description)))
                        .unwrap_or_default(),
                ));
            }
        }
    }

    output
}

/// Format one class with its methods
pub fn format_class_text(class: &ClassDescriptor, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let mut heading = format!("class {}", class.name);
    if let Some(extends) = &class.extends {
        heading.push_str(&format!(" extends {}", extends));
    }
    output.push_str(&format!("  {}", paint(use_colors, Green.bold(), heading)));

    match class.description() {
        Some(description) => output.push_str(&format!(" - {}\n", first_line(description))),
        None if use_colors => output.push_str(&format!(" {}\n", Style::new().dimmed().paint("(undocumented)"))),
        None => output.push_str(" (undocumented)\n"),
    }

    for method in &class.methods {
        output.push_str(&format_method_text(method, use_colors, verbose));
    }

    output
}

/// Format the documentation of one file
pub fn format_file_text(file: &FileDocumentation, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        paint(use_colors, Blue.bold(), file.file_name.display().to_string())
    ));

    if verbose && !file.dependencies.is_empty() {
        let dependencies: Vec<String> = file
            .dependencies
            .iter()
            .map(|dependency| dependency.display().to_string())
            .collect();
        output.push_str(&format!("  requires: {}\n", dependencies.join(", ")));
    }

    for error in &file.parse_errors {
        output.push_str(&format!("  {} {}\n", paint(use_colors, Yellow.bold(), "parse error:"), error));
    }

    if file.classes.is_empty() {
        output.push_str("  (no classes)\n");
    }

    for class in &file.classes {
        output.push_str(&format_class_text(class, use_colors, verbose));
    }

    output.push('\n');
    output
}

/// Format the summary block of a report
pub fn format_summary_text(report: &AnalysisReport, use_colors: bool) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    output.push_str(&format!("{}\n\n", paint(use_colors, Blue.bold(), "Documentation Summary")));
    output.push_str(&format!("Project root: {}\n", report.project_root.display()));
    output.push_str(&format!("Files: {}\n", summary.files));
    output.push_str(&format!(
        "Classes: {} ({} documented)\n",
        summary.classes, summary.documented_classes
    ));
    output.push_str(&format!(
        "Methods: {} ({} documented, {:.1}%)\n",
        summary.methods,
        summary.documented_methods,
        summary.method_coverage()
    ));
    output.push_str(&format!(
        "Parameters: {} ({} documented)\n",
        summary.parameters, summary.documented_parameters
    ));
    output.push_str(&format!("Analysis duration: {}\n", format_duration(summary.analysis_duration)));

    if summary.files_with_errors > 0 {
        output.push_str(&format!(
            "\n{}\n",
            paint(
                use_colors,
                Red.bold(),
                format!("Files with parse errors: {}", summary.files_with_errors)
            )
        ));
    }

    output
}

/// One-line summary used in quiet mode
pub fn format_summary_line(summary: &AnalysisSummary) -> String {
    let mut line = format!(
        "Files: {}, Classes: {}, Methods: {} ({:.1}% documented)\n",
        summary.files,
        summary.classes,
        summary.methods,
        summary.method_coverage()
    );
    if summary.files_with_errors > 0 {
        line.push_str(&format!("Files with parse errors: {}\n", summary.files_with_errors));
    }
    line
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Format a report as JSON
///
/// Syntax trees and sources are large, so each is only kept when asked for.
pub fn format_report_json(
    report: &AnalysisReport,
    include_ast: bool,
    include_source: bool,
    pretty: bool,
) -> Result<String> {
    let json_error = |source| DocwalkError::JsonSerialize {
        source,
        #[cfg(not(tarpaulin_include))]
        trace: std::backtrace::Backtrace::capture(),
    };

    let mut value = serde_json::to_value(report).map_err(json_error)?;

    if let Some(files) = value.get_mut("files").and_then(Value::as_array_mut) {
        for file in files.iter_mut().filter_map(Value::as_object_mut) {
            if !include_ast {
                file.remove("ast");
            }
            if !include_source {
                file.remove("source");
            }
        }
    }

    if pretty {
        serde_json::to_string_pretty(&value).map_err(json_error)
    } else {
        serde_json::to_string(&value).map_err(json_error)
    }
}
