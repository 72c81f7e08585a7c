//! Configuration management
//!
//! Settings are merged from environment variables, a TOML configuration file
//! and the command line, in increasing order of precedence.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use tracing::debug;

pub use file::{FileConfig, EnvConfig, DEFAULT_CONFIG_FILE};
pub use cli::{CliConfig, CliArgs};
pub use settings::SettingsValidator;
pub use parser::{parse_config_file, parse_config_content, find_default_config, create_default_config};

/// Environment variable prefix read by [`load_config`]
pub const ENV_PREFIX: &str = "DOCWALK";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Result<Self> {
        if !source.is_available() {
            return Ok(self);
        }

        debug!(source = source.name(), "loading configuration");
        Ok(self.merge(source.load()?))
    }

    /// Try to load from a source, ignoring it if unavailable or broken
    pub fn try_load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }

        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(error) => {
                debug!(source = source.name(), %error, "ignoring configuration source");
                self
            }
        }
    }

    /// Add configuration from a file
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        self.load_from(&file_config)
    }

    /// Try to add configuration from the default config file locations
    pub fn try_add_default_config_file(self) -> Self {
        match parser::find_default_config() {
            Ok(Some(default_config)) => self.merge(default_config),
            Ok(None) => self,
            Err(error) => {
                debug!(%error, "ignoring default configuration file");
                self
            }
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from the environment, a configuration file and the
/// command line
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
///
/// An explicitly named configuration file must exist; the default locations
/// are only searched when none is named.
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let env_config = EnvConfig::new(env_prefix);
    let mut builder = ConfigBuilder::new().try_load_from(&env_config);

    builder = match &cli_args.config {
        Some(path) => {
            let file_config = FileConfig::with_path(path);
            builder.merge(file_config.load()?)
        }
        None => builder.try_add_default_config_file(),
    };

    let cli_config = CliConfig::new(cli_args);
    builder.load_from(&cli_config)?.build()
}
