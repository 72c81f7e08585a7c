//! Settings validation

use std::path::Path;
use crate::models::config::Settings;
use crate::error::{DocwalkError, Result};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.project_root.is_dir() {
            return Err(DocwalkError::InvalidPath {
                path: settings.project_root.clone(),
                #[cfg(not(tarpaulin_include))]
                trace: std::backtrace::Backtrace::capture(),
            });
        }

        if settings.extension.trim().is_empty() {
            return Err(DocwalkError::config_error("Extension must not be empty"));
        }

        if let Some(entry) = &settings.entry {
            if entry.as_os_str().is_empty() {
                return Err(DocwalkError::config_error("Entry file name must not be empty"));
            }
        }

        // Validate output file path is writable if specified
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !parent.exists() {
            return Err(DocwalkError::OutputDirectoryNotFound {
                path: parent.to_path_buf(),
                #[cfg(not(tarpaulin_include))]
                trace: std::backtrace::Backtrace::capture(),
            });
        }

        // Best effort: the owner write bit only
        let metadata = std::fs::metadata(parent).map_err(DocwalkError::io_error)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o200 == 0 {
                return Err(DocwalkError::permission_denied(parent));
            }
        }
        #[cfg(not(unix))]
        if metadata.permissions().readonly() {
            return Err(DocwalkError::permission_denied(parent));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SettingsValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_missing_project_root() {
        let settings = Settings {
            project_root: PathBuf::from("/definitely/not/a/project/root"),
            ..Default::default()
        };

        assert!(matches!(
            SettingsValidator::validate(&settings),
            Err(DocwalkError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_empty_extension() {
        let settings = Settings {
            extension: " ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            SettingsValidator::validate(&settings),
            Err(DocwalkError::Config { .. })
        ));
    }

    #[test]
    fn test_output_directory() {
        let dir = tempdir().unwrap();

        let valid = Settings {
            output_file: Some(dir.path().join("docs.json")),
            ..Default::default()
        };
        assert!(SettingsValidator::validate(&valid).is_ok());

        let bare_name = Settings {
            output_file: Some(PathBuf::from("docs.json")),
            ..Default::default()
        };
        assert!(SettingsValidator::validate(&bare_name).is_ok());

        let missing = Settings {
            output_file: Some(dir.path().join("missing/docs.json")),
            ..Default::default()
        };
        assert!(matches!(
            SettingsValidator::validate(&missing),
            Err(DocwalkError::OutputDirectoryNotFound { .. })
        ));
    }
}
