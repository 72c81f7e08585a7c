//! Command-line argument configuration source

use std::path::PathBuf;

use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};
use super::ConfigSource;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub entry: Option<PathBuf>,
    pub add: Option<Vec<PathBuf>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub include_ast: bool,
    pub include_source: bool,
    pub extension: Option<String>,
    pub use_async: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Capture the configuration-relevant flags of parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            root: args.root.clone(),
            entry: args.entry.clone(),
            add: if args.add.is_empty() { None } else { Some(args.add.clone()) },
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            include_ast: args.include_ast,
            include_source: args.include_source,
            extension: args.extension.clone(),
            use_async: args.use_async,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(root) = &self.args.root {
            settings.project_root = Some(root.clone());
        }

        if let Some(entry) = &self.args.entry {
            settings.entry = Some(entry.clone());
        }

        if let Some(add) = &self.args.add {
            settings.add_files = Some(add.clone());
        }

        if let Some(format) = self.args.output_format {
            settings.output_format = Some(format);
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        if let Some(extension) = &self.args.extension {
            settings.extension = Some(extension.clone());
        }

        // Boolean flags
        if self.args.include_ast {
            settings.include_ast = Some(true);
        }

        if self.args.include_source {
            settings.include_source = Some(true);
        }

        if self.args.use_async {
            settings.use_async = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
