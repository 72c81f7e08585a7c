//! Command-line parsing and command dispatch

use super::common::library;
use clap::Parser;
use docwalk::cli::{exit_code, run_analysis, Args, Command};
use docwalk::config::{load_config_with_env_prefix, CliArgs};
use docwalk::output::ProgressReporter;
use docwalk::DocwalkError;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_parse_arguments() {
    let args = Args::try_parse_from([
        "docwalk",
        "--root",
        "project",
        "--entry",
        "index.js",
        "--add",
        "a.js",
        "--add",
        "b.js",
        "--output",
        "json",
        "--extension",
        ".mjs",
        "--async",
        "--no-colors",
    ])
    .unwrap();

    assert_eq!(args.root, Some(PathBuf::from("project")));
    assert_eq!(args.entry, Some(PathBuf::from("index.js")));
    assert_eq!(args.add, vec![PathBuf::from("a.js"), PathBuf::from("b.js")]);
    assert_eq!(args.extension.as_deref(), Some(".mjs"));
    assert!(args.use_async);
    assert!(args.no_colors);
    assert!(matches!(Command::from_args(args), Command::Analyze(_)));
}

#[test]
fn test_invalid_output_format_rejected() {
    assert!(Args::try_parse_from(["docwalk", "--output", "xml"]).is_err());
}

#[test]
fn test_missing_config_fails_validation() {
    let args = Args::try_parse_from(["docwalk", "--config", "/nonexistent/docwalk.toml"]).unwrap();
    let command = Command::from_args(args);

    let err = command.validate().unwrap_err();
    assert!(matches!(err, DocwalkError::ConfigNotFound { .. }));
    assert_eq!(command.run(), exit_code(&err));
}

#[test]
fn test_arguments_drive_analysis() {
    let dir = library();
    let config = dir.path().join("docwalk.toml");
    fs::write(&config, "quiet = true\nshow_progress = false\n").unwrap();

    let root = dir.path().display().to_string();
    let config = config.display().to_string();
    let args = Args::try_parse_from([
        "docwalk",
        "--root",
        root.as_str(),
        "--add",
        "lib/cache.js",
        "--config",
        config.as_str(),
    ])
    .unwrap();

    let settings = load_config_with_env_prefix(CliArgs::from_args(&args), "DWTEST_CLI").unwrap();
    assert!(settings.quiet);
    assert!(!settings.show_progress);

    let report = run_analysis(&settings, &ProgressReporter::hidden()).unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].file_name, PathBuf::from("lib/cache.js"));
    assert_eq!(report.files[0].classes[0].name, "Cache");
}

#[test]
fn test_nothing_to_document_is_critical() {
    let dir = library();
    let root = dir.path().display().to_string();
    let args = Args::try_parse_from(["docwalk", "--root", root.as_str()]).unwrap();
    let mut cli_args = CliArgs::from_args(&args);
    cli_args.config = Some(dir.path().join("missing.toml"));

    // The named configuration file must exist
    assert!(matches!(
        load_config_with_env_prefix(cli_args, "DWTEST_CLI_EMPTY"),
        Err(DocwalkError::ConfigNotFound { .. })
    ));

    let settings = docwalk::Settings {
        project_root: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = run_analysis(&settings, &ProgressReporter::hidden()).unwrap_err();
    assert_eq!(exit_code(&err), 2);
}
