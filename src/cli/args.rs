//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// docwalk - API documentation extractor for JavaScript projects
#[derive(Parser, Debug)]
#[command(name = "docwalk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract class, method and parameter documentation from JavaScript sources")]
#[command(long_about = "docwalk follows the local require() calls of an entry file to find the sources of a \
JavaScript project, attaches the /** ... */ documentation comments to the syntax tree of every file and \
reports the classes, methods and parameters each file defines together with their documentation.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Document the project in the current directory starting at index.js
    docwalk --entry index.js

    # Document a project somewhere else
    docwalk --root ./my-project --entry src/main.js

    # Document single files without following their dependencies
    docwalk --add src/a.js --add src/b.js

Output Options:
    # Output in JSON format
    docwalk --entry index.js --output json

    # Include syntax trees and sources in the JSON output
    docwalk --entry index.js --output json --include-ast --include-source

    # Save results to a file
    docwalk --entry index.js --output-file docs.json

    # Disable colored output
    docwalk --entry index.js --no-colors

Resolution:
    # Resolve extension-less module names with another extension
    docwalk --entry index.mjs --extension .mjs

Configuration:
    # Use a specific configuration file
    docwalk --config ./docwalk.toml

    # Create a default configuration file
    docwalk --init

Verbosity:
    # Quiet mode with minimal output
    docwalk --entry index.js --quiet

    # Verbose mode with detailed information
    docwalk --entry index.js --verbose
")]
pub struct Args {
    /// Project root directory
    #[arg(short, long, value_name = "DIR", help = "Root directory of the project; registered paths are reported relative to it (defaults to the current directory)")]
    pub root: Option<PathBuf>,

    /// Entry file whose dependencies are followed
    #[arg(short, long, value_name = "FILE", help = "Entry file relative to the project root; every local file it requires is documented as well")]
    pub entry: Option<PathBuf>,

    /// Files added without following their dependencies
    #[arg(short, long, value_name = "FILE", help = "File, relative to the project root, to document without following its dependencies (can be specified multiple times)")]
    pub add: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, help = "Output format for results: 'text' for a human-readable summary (default), 'json' for machine processing")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified, e.g., --output-file ./docs.json)")]
    pub output_file: Option<PathBuf>,

    /// Include syntax trees in JSON output
    #[arg(long, help = "Include the comment-annotated syntax tree of every file in JSON output")]
    pub include_ast: bool,

    /// Include sources in JSON output
    #[arg(long, help = "Include the source text of every file in JSON output")]
    pub include_source: bool,

    /// Extension for extension-less module names
    #[arg(long, value_name = "EXT", help = "Extension appended to required module names that do not name a file (default: .js)")]
    pub extension: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only show results, no progress or summary information)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug information")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .docwalk.toml in current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Read files with non-blocking I/O
    #[arg(long = "async", help = "Discover and read source files with non-blocking I/O")]
    pub use_async: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.docwalk.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
