//! Command implementations

use super::Args;
use crate::config::{load_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::config::parser::create_default_config;
use crate::core::{DiscoveryOptions, SourceDocumentation};
use crate::error::{DocwalkError, ErrorSeverity, Result};
use crate::models::analysis::{AnalysisReport, FileDocumentation};
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer, ProgressReporter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Document the project described by the arguments
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                self.validate()?;

                let settings = load_config(CliArgs::from_args(args))?;
                debug!(?settings, "resolved settings");

                let reporter = ProgressReporter::new(settings.quiet, settings.verbose, settings.show_progress);
                let report = run_analysis(&settings, &reporter)?;

                let formatter = create_formatter(&settings);
                let writer = create_writer(settings.output_file.as_ref());
                writer.write(&formatter.format(&report)?)?;

                if let Some(path) = &settings.output_file {
                    reporter.print(&format!("Documentation written to {}", path.display()));
                }

                Ok(())
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if !init_config(&config_path)? {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                println!("Created default configuration file at: {}", config_path.display());
                println!("\nEvery setting in it is commented out; uncomment the ones you need:");
                println!("  - project_root: Root directory of the documented project");
                println!("  - entry: Entry file whose required files are documented too");
                println!("  - add_files: Files documented without following their dependencies");
                println!("  - extension: Extension appended to extension-less module names");
                println!("  - output_format: Output format (text, json)");

                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                if let Some(root) = &args.root {
                    if !root.is_dir() {
                        return Err(DocwalkError::InvalidPath {
                            path: root.clone(),
                            #[cfg(not(tarpaulin_include))]
                            trace: std::backtrace::Backtrace::capture(),
                        });
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(DocwalkError::ConfigNotFound {
                            path: config_path.clone(),
                            #[cfg(not(tarpaulin_include))]
                            trace: std::backtrace::Backtrace::capture(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and map its outcome to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                report_error(&err);
                exit_code(&err)
            }
        }
    }
}

/// Exit code for an error: 0 for warnings, 1 for errors, 2 for critical errors
pub fn exit_code(err: &DocwalkError) -> i32 {
    match err.severity() {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

fn report_error(err: &DocwalkError) {
    eprintln!("\n{}: {}", err.severity(), err.user_message());

    match err {
        DocwalkError::InvalidArgument { .. } => {
            eprintln!("Suggestion: Name an entry file with --entry or files to document with --add");
        }
        DocwalkError::FileNotFound { .. } => {
            eprintln!("Suggestion: Entry and added files are resolved against the project root (--root)");
        }
        DocwalkError::InvalidPath { .. } => {
            eprintln!("Suggestion: Check that the project root exists and is a directory");
        }
        DocwalkError::ConfigNotFound { .. } => {
            eprintln!(
                "Suggestion: Create a {} file with --init or specify a config file with --config",
                DEFAULT_CONFIG_FILE
            );
        }
        DocwalkError::OutputDirectoryNotFound { .. } => {
            eprintln!("Suggestion: Create the output directory first or specify a different path");
        }
        _ => {}
    }

    if std::env::var("RUST_BACKTRACE").is_ok() {
        if let Some(backtrace) = err.backtrace() {
            eprintln!("\nBacktrace:\n{}", backtrace);
        }
    }
}

/// Create the default configuration file at `path`
///
/// Returns false and leaves the file untouched when it already exists.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    create_default_config(path)?;
    info!(path = %path.display(), "created default configuration file");
    Ok(true)
}

/// Register the sources named by `settings` and document them
pub fn run_analysis(settings: &Settings, reporter: &ProgressReporter) -> Result<AnalysisReport> {
    if settings.entry.is_none() && settings.add_files.is_empty() {
        return Err(DocwalkError::invalid_argument(
            "nothing to document: no entry file and no added files",
        ));
    }

    let started = Instant::now();
    let mut documentation = SourceDocumentation::new(&settings.project_root)?.with_options(DiscoveryOptions {
        extension: settings.extension.clone(),
    });

    reporter.spin(&format!("Discovering sources in {}", settings.project_root.display()));
    if settings.use_async {
        collect_sources_async(&mut documentation, settings)?;
    } else {
        collect_sources(&mut documentation, settings)?;
    }

    let total = documentation.files().len();
    reporter.start(total, "Analysing source files");

    let mut files: Vec<FileDocumentation> = Vec::with_capacity(total);
    for (position, file) in documentation.files().iter().enumerate() {
        reporter.update(position + 1, total, &file.path.display().to_string());
        let analysed = documentation.analyze_file(file);
        if analysed.has_errors() {
            reporter.print_warning(&format!(
                "{} has {} parse error(s); documenting what could be recovered",
                analysed.file_name.display(),
                analysed.parse_errors.len()
            ));
        }
        files.push(analysed);
    }

    let report = AnalysisReport::new(documentation.project_root().to_path_buf(), files, started.elapsed());
    reporter.finish(&format!(
        "Documented {} classes in {} files",
        report.summary.classes, report.summary.files
    ));
    info!(
        files = report.summary.files,
        classes = report.summary.classes,
        methods = report.summary.methods,
        "documentation complete"
    );

    Ok(report)
}

fn added_paths(settings: &Settings) -> Vec<PathBuf> {
    settings
        .add_files
        .iter()
        .map(|file| settings.project_root.join(file))
        .collect()
}

fn collect_sources(documentation: &mut SourceDocumentation, settings: &Settings) -> Result<()> {
    if let Some(entry) = &settings.entry {
        documentation.discover_source_files(entry)?;
    }
    documentation.add_files(added_paths(settings))
}

fn collect_sources_async(documentation: &mut SourceDocumentation, settings: &Settings) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DocwalkError::io_error)?;

    runtime.block_on(async {
        if let Some(entry) = &settings.entry {
            documentation.discover_source_files_async(entry).await?;
        }
        documentation.add_files_async(added_paths(settings)).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.js"),
            "require('./lib');\n/** Entry point */\nclass App { start(port) {} }\n",
        )
        .unwrap();
        fs::write(dir.path().join("lib.js"), "class Lib {}\n").unwrap();
        fs::write(dir.path().join("extra.js"), "require('./lib');\nclass Extra {}\n").unwrap();
        dir
    }

    fn settings(root: &Path) -> Settings {
        Settings {
            project_root: root.to_path_buf(),
            show_progress: false,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_args() {
        let init = Args::try_parse_from(["docwalk", "--init"]).unwrap();
        assert!(matches!(Command::from_args(init), Command::Init));

        let analyze = Args::try_parse_from(["docwalk", "--entry", "index.js"]).unwrap();
        assert!(matches!(Command::from_args(analyze), Command::Analyze(_)));
    }

    #[test]
    fn test_validate_missing_root() {
        let args = Args::try_parse_from(["docwalk", "--root", "/nonexistent/project/root"]).unwrap();
        let command = Command::from_args(args);

        let err = command.validate().unwrap_err();
        assert!(matches!(err, DocwalkError::InvalidPath { .. }));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_run_analysis_requires_sources() {
        let dir = project();
        let result = run_analysis(&settings(dir.path()), &ProgressReporter::hidden());

        let err = result.unwrap_err();
        assert!(matches!(err, DocwalkError::InvalidArgument { .. }));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_run_analysis_entry_and_added_files() {
        let dir = project();
        let settings = Settings {
            entry: Some(PathBuf::from("index.js")),
            add_files: vec![PathBuf::from("extra.js")],
            ..settings(dir.path())
        };

        let report = run_analysis(&settings, &ProgressReporter::hidden()).unwrap();

        let names: Vec<_> = report.files.iter().map(|file| file.file_name.clone()).collect();
        assert_eq!(
            names,
            vec![PathBuf::from("index.js"), PathBuf::from("lib.js"), PathBuf::from("extra.js")]
        );
        assert_eq!(report.summary.classes, 3);
        assert_eq!(report.files[0].classes[0].description(), Some("Entry point"));
    }

    #[test]
    fn test_run_analysis_async_matches_blocking() {
        let dir = project();
        let blocking = Settings {
            entry: Some(PathBuf::from("index.js")),
            ..settings(dir.path())
        };
        let non_blocking = Settings {
            use_async: true,
            ..blocking.clone()
        };

        let first = run_analysis(&blocking, &ProgressReporter::hidden()).unwrap();
        let second = run_analysis(&non_blocking, &ProgressReporter::hidden()).unwrap();

        let names = |report: &AnalysisReport| -> Vec<PathBuf> {
            report.files.iter().map(|file| file.file_name.clone()).collect()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.summary.classes, second.summary.classes);
    }

    #[test]
    fn test_run_analysis_missing_entry() {
        let dir = project();
        let settings = Settings {
            entry: Some(PathBuf::from("missing.js")),
            ..settings(dir.path())
        };

        let result = run_analysis(&settings, &ProgressReporter::hidden());
        assert!(matches!(result, Err(DocwalkError::FileNotFound { .. })));
    }

    #[test]
    fn test_init_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        assert!(init_config(&path).unwrap());
        fs::write(&path, "entry = \"kept.js\"\n").unwrap();
        assert!(!init_config(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "entry = \"kept.js\"\n");
    }
}
