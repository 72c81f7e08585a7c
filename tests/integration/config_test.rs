//! Layered configuration loading

use super::common::project;
use docwalk::config::{create_default_config, load_config_with_env_prefix, parse_config_file, CliArgs};
use docwalk::models::config::OutputFormat;
use docwalk::DocwalkError;
use std::env;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_cli_overrides_file_overrides_environment() {
    let dir = project(&[("src/index.js", "class App {}\n")]);
    let config = dir.path().join("docwalk.toml");
    fs::write(
        &config,
        format!(
            "project_root = {:?}\nentry = \"src/index.js\"\noutput_format = \"json\"\nextension = \".cjs\"\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    env::set_var("DWTEST_LAYERS_EXTENSION", ".mjs");
    env::set_var("DWTEST_LAYERS_ENTRY", "other.js");

    let cli_args = CliArgs {
        config: Some(config.clone()),
        extension: Some(".es".to_string()),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "DWTEST_LAYERS").unwrap();

    env::remove_var("DWTEST_LAYERS_EXTENSION");
    env::remove_var("DWTEST_LAYERS_ENTRY");

    assert_eq!(settings.project_root, dir.path());
    assert_eq!(settings.entry, Some(PathBuf::from("src/index.js")));
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert_eq!(settings.extension, ".es");
}

#[test]
fn test_invalid_project_root_rejected() {
    let dir = project(&[]);
    let config = dir.path().join("docwalk.toml");
    fs::write(&config, "project_root = \"/nonexistent/docwalk/project\"\n").unwrap();

    let cli_args = CliArgs {
        config: Some(config),
        ..Default::default()
    };
    assert!(matches!(
        load_config_with_env_prefix(cli_args, "DWTEST_INVALID_ROOT"),
        Err(DocwalkError::InvalidPath { .. })
    ));
}

#[test]
fn test_malformed_config_file() {
    let dir = project(&[]);
    let config = dir.path().join("docwalk.toml");
    fs::write(&config, "entry = [not toml").unwrap();

    assert!(parse_config_file(&config).is_err());
}

#[test]
fn test_default_config_parses_to_defaults() {
    let dir = project(&[]);
    let config = dir.path().join(".docwalk.toml");

    create_default_config(&config).unwrap();
    let partial = parse_config_file(&config).unwrap();

    assert!(partial.entry.is_none());
    assert!(partial.project_root.is_none());
    assert!(partial.output_format.is_none());
}
