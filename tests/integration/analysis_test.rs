//! Documentation extracted through the orchestrator

use super::common::{library, project};
use docwalk::models::analysis::find_file;
use docwalk::{DocwalkError, MethodKind, ParameterShape, SourceDocumentation};
use std::path::{Path, PathBuf};

#[test]
fn test_analyze_library() {
    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("index.js").unwrap();

    let files = documentation.analyze();

    let names: Vec<_> = files.iter().map(|file| file.file_name.clone()).collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("index.js"),
            PathBuf::from("lib/store.js"),
            PathBuf::from("lib/cache.js"),
        ]
    );
    assert!(files[0].classes.is_empty());
    assert!(files.iter().all(|file| !file.has_errors()));
}

#[test]
fn test_store_documentation() {
    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("index.js").unwrap();
    let files = documentation.analyze();

    let store_file = find_file(&files, Path::new("lib/store.js")).unwrap();
    let store = store_file.class("Store").unwrap();
    assert_eq!(store.description(), Some("Persistent key value store."));
    assert_eq!(store.methods.len(), 3);

    let constructor = store.constructor().unwrap();
    assert_eq!(constructor.description(), Some("Create a store."));
    assert_eq!(constructor.parameters.len(), 1);

    let options = &constructor.parameters[0];
    assert_eq!(options.shape, ParameterShape::Object);
    assert_eq!(options.name.as_deref(), Some("options"));
    assert_eq!(options.description.as_deref(), Some("store options"));
    assert_eq!(options.default_value.as_deref(), Some("{}"));

    let path = options.value("path").unwrap();
    assert_eq!(path.type_name.as_deref(), Some("string"));
    assert_eq!(path.description.as_deref(), Some("file the store is kept in"));

    let limit = options.value("limit").unwrap();
    assert_eq!(limit.default_value.as_deref(), Some("100"));
    assert_eq!(limit.description.as_deref(), Some("maximum number of entries"));

    let get = store.method("get").unwrap();
    assert_eq!(get.kind, MethodKind::Method);
    assert_eq!(get.parameters[0].name.as_deref(), Some("key"));
    assert_eq!(get.parameters[0].description.as_deref(), Some("the key to look up"));
    assert_eq!(get.tags("returns").len(), 1);

    let clear = store.method("clear").unwrap();
    assert!(clear.is_static);
    assert!(clear.is_async);
    assert_eq!(clear.description(), Some("Remove every entry."));
}

#[test]
fn test_assigned_class_expression() {
    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("index.js").unwrap();
    let files = documentation.analyze();

    let cache = find_file(&files, Path::new("lib/cache.js"))
        .and_then(|file| file.class("Cache"))
        .unwrap();
    assert_eq!(cache.description(), Some("In-memory cache"));

    let put = cache.method("put").unwrap();
    assert_eq!(put.parameters.len(), 2);
    assert!(put.parameters[1].is_rest);
    assert_eq!(put.parameters[1].name.as_deref(), Some("values"));
    assert_eq!(put.parameters[1].description.as_deref(), Some("values to keep"));
}

#[test]
fn test_add_files_relative_to_root() {
    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();

    documentation
        .add_files([dir.path().join("lib/store.js"), dir.path().join("lib/cache.js")])
        .unwrap();

    let paths: Vec<_> = documentation.files().paths().collect();
    assert_eq!(paths, vec![Path::new("lib/store.js"), Path::new("lib/cache.js")]);
    assert!(documentation
        .files()
        .dependencies_of(Path::new("lib/store.js"))
        .is_empty());
}

#[test]
fn test_files_outside_the_root_keep_their_path() {
    let dir = library();
    let other = project(&[("outside.js", "class Outside {}")]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();

    documentation.add_files([other.path().join("outside.js")]).unwrap();

    let files = documentation.analyze();
    assert_eq!(files[0].file_name, other.path().join("outside.js"));
    assert_eq!(files[0].classes[0].name, "Outside");
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        SourceDocumentation::new(""),
        Err(DocwalkError::InvalidArgument { .. })
    ));

    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    assert!(matches!(
        documentation.discover_source_files(""),
        Err(DocwalkError::InvalidArgument { .. })
    ));
    assert!(matches!(
        documentation.add_files([""]),
        Err(DocwalkError::InvalidArgument { .. })
    ));
    assert!(matches!(
        documentation.discover_source_files("missing.js"),
        Err(DocwalkError::FileNotFound { .. })
    ));
    assert!(documentation.files().is_empty());
}

#[test]
fn test_malformed_documentation_degrades() {
    let dir = project(&[(
        "broken.js",
        r#"class Broken {
    /**
     * Unclosed type.
     * @param {string name - never closed
     */
    run(name) {}
}
"#,
    )]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("broken.js").unwrap();

    let files = documentation.analyze();
    let run = files[0].class("Broken").unwrap().method("run").unwrap();

    assert!(run.documentation.is_none());
    assert_eq!(run.parameters[0].name.as_deref(), Some("name"));
    assert!(run.parameters[0].description.is_none());
}

#[test]
fn test_parse_errors_are_recovered() {
    let dir = project(&[(
        "partial.js",
        "/** Survives */\nclass Partial { ok() {} }\nfunction broken( {\n",
    )]);
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();
    documentation.discover_source_files("partial.js").unwrap();

    let files = documentation.analyze();
    assert!(files[0].has_errors());
}

#[tokio::test]
async fn test_async_orchestration() {
    let dir = library();
    let mut documentation = SourceDocumentation::new(dir.path()).unwrap();

    documentation.discover_source_files_async("index.js").await.unwrap();
    let files = documentation.analyze_async().await;

    assert_eq!(files.len(), 3);
    assert_eq!(files[1].classes[0].name, "Store");
}
