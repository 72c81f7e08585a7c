//! Full runs: discovery, extraction and output

use super::common::{library, project};
use docwalk::cli::run_analysis;
use docwalk::models::config::{OutputFormat, Settings};
use docwalk::output::{create_formatter, create_writer, ProgressReporter};
use docwalk::{ParameterShape, SourceDocumentation};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_destructured_constructor_scenario() {
    let dir = project(&[(
        "index.js",
        r#"/**
 * Creates documentation for a project.
 */
class SourceDocumentation {
    /**
     * @param {string} projectRoot - root directory of the project
     */
    constructor({ projectRoot }) {
        this.projectRoot = projectRoot;
    }
}

module.exports = SourceDocumentation;
"#,
    )]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("index.js").unwrap();

    let files = documentation.analyze();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, PathBuf::from("index.js"));
    assert_eq!(files[0].classes.len(), 1);

    let constructor = files[0].classes[0].constructor().unwrap();
    assert_eq!(constructor.parameters.len(), 1);

    let parameter = &constructor.parameters[0];
    assert_eq!(parameter.shape, ParameterShape::Object);
    assert_eq!(parameter.values.len(), 1);
    assert_eq!(parameter.values[0].name, "projectRoot");
    assert_eq!(
        parameter.values[0].description.as_deref(),
        Some("root directory of the project")
    );
}

#[test]
fn test_exact_path_wins_over_extension() {
    let dir = project(&[
        ("main.js", "const models = require('./models');\n"),
        ("models", "require('./base');\n"),
        ("models.js", "class Unused {}\n"),
        ("base.js", "module.exports.Model = class Model {};\n"),
    ]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("main.js").unwrap();

    let files = documentation.analyze();
    let names: Vec<_> = files.iter().map(|file| file.file_name.clone()).collect();
    assert_eq!(
        names,
        vec![PathBuf::from("main.js"), PathBuf::from("models"), PathBuf::from("base.js")]
    );
    assert!(files[1].classes.is_empty());
    assert_eq!(files[2].classes[0].name, "Model");
}

#[test]
fn test_assignment_names_with_extension() {
    let dir = project(&[
        ("main.js", "const models = require('./models');\n"),
        ("models.js", "/** A user */\nexports.User = class extends Base.Model {};\n"),
    ]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("main.js").unwrap();

    let files = documentation.analyze();
    let user = &files[1].classes[0];
    assert_eq!(user.name, "User");
    assert_eq!(user.extends.as_deref(), Some("Base.Model"));
    assert_eq!(user.description(), Some("A user"));
}

#[test]
fn test_run_analysis_to_json_file() {
    let dir = library();
    let output_file = dir.path().join("docs.json");
    let settings = Settings {
        project_root: dir.path().to_path_buf(),
        entry: Some(PathBuf::from("index.js")),
        output_format: OutputFormat::Json,
        output_file: Some(output_file.clone()),
        show_progress: false,
        quiet: true,
        ..Default::default()
    };

    let report = run_analysis(&settings, &ProgressReporter::hidden()).unwrap();
    let formatter = create_formatter(&settings);
    create_writer(settings.output_file.as_ref())
        .write(&formatter.format(&report).unwrap())
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output_file).unwrap()).unwrap();
    assert_eq!(json["summary"]["files"], 3);
    assert_eq!(json["summary"]["classes"], 2);
    assert_eq!(json["files"][1]["file_name"], "lib/store.js");
    assert_eq!(json["files"][1]["classes"][0]["name"], "Store");
    assert_eq!(
        json["files"][1]["classes"][0]["methods"][0]["parameters"][0]["values"][1]["default_value"],
        "100"
    );
    assert!(json["files"][0].get("ast").is_none());
}

#[test]
fn test_run_analysis_to_text() {
    let dir = library();
    let settings = Settings {
        project_root: dir.path().to_path_buf(),
        entry: Some(PathBuf::from("index.js")),
        use_colors: false,
        show_progress: false,
        quiet: false,
        ..Default::default()
    };

    let report = run_analysis(&settings, &ProgressReporter::hidden()).unwrap();
    let output = create_formatter(&settings).format(&report).unwrap();

    assert!(output.contains("lib/store.js"));
    assert!(output.contains("class Store - Persistent key value store."));
    assert!(output.contains("static async clear()"));
    assert!(output.contains("class Cache - In-memory cache"));
    assert!(output.contains("put(key, ...values)"));
    assert!(output.contains("Classes: 2 (2 documented)"));
}
