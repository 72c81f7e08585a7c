//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocwalkError, Result, ResultExt};
use crate::models::config::PartialSettings;
use super::file::DEFAULT_CONFIG_FILE;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocwalkError::ConfigNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| DocwalkError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content)
        .map_err(|e| DocwalkError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
            #[cfg(not(tarpaulin_include))]
            trace: std::backtrace::Backtrace::capture(),
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    let empty_paths = [
        ("project_root", settings.project_root.as_ref()),
        ("entry", settings.entry.as_ref()),
        ("output_file", settings.output_file.as_ref()),
    ];
    for (key, value) in empty_paths {
        if value.is_some_and(|value| value.as_os_str().is_empty()) {
            return Err(DocwalkError::config_error(format!(
                "Invalid empty {} in config file: {}",
                key,
                path.display()
            )));
        }
    }

    if let Some(files) = &settings.add_files {
        if files.iter().any(|file| file.as_os_str().is_empty()) {
            return Err(DocwalkError::config_error(format!(
                "Empty entry in add_files in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(extension) = &settings.extension {
        if extension.trim().is_empty() {
            return Err(DocwalkError::config_error(format!(
                "Invalid empty extension in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, most specific first
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("docwalk").join("config.toml"));
    }

    locations
}

/// Load the first existing configuration file among `candidates`
pub fn find_config_in<I>(candidates: I) -> Result<Option<PartialSettings>>
where
    I: IntoIterator<Item = PathBuf>,
{
    for candidate in candidates {
        if candidate.is_file() {
            return parse_config_file(candidate).map(Some);
        }
    }

    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(default_config_locations())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_file_context(parent)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).with_file_context(path)?;

    Ok(())
}
