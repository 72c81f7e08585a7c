//! Source discovery by following local `require` calls
//!
//! Starting at one file, the walker reads it, scans its text for
//! `require('<literal>')` calls and recursively discovers every literal that
//! resolves to a local file. The text is scanned lexically, so computed module
//! names are ignored while calls in dead code are still followed. Files are
//! recorded in depth-first preorder and each one is read at most once.

use crate::error::{DocwalkError, Result};
use crate::models::file_graph::FileGraph;
use regex::Regex;
use std::fs;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;
use std::sync::LazyLock;
use tracing::{debug, trace};

static REQUIRE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)require\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#).expect("require pattern is valid")
});

/// Options of a discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Appended to a module name that does not name an existing file
    pub extension: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extension: ".js".to_string(),
        }
    }
}

/// Module names of all `require` calls with a literal argument, in text order
pub fn required_modules(source: &str) -> Vec<&str> {
    REQUIRE_PATTERN
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|module| module.as_str())
        .collect()
}

/// Lexically normalise a path: drop `.` components and fold `..` into the
/// preceding component
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

fn with_extension_appended(path: &Path, extension: &str) -> PathBuf {
    let mut appended = path.as_os_str().to_os_string();
    appended.push(extension);
    PathBuf::from(appended)
}

/// Walks the local dependency tree of a file
///
/// One instance owns one [`FileGraph`]; calling [`SourceDiscovery::discover`]
/// again adds to the same graph and never re-reads a known file.
#[derive(Debug, Default)]
pub struct SourceDiscovery {
    options: DiscoveryOptions,
    files: FileGraph,
}

impl SourceDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DiscoveryOptions) -> Self {
        Self {
            options,
            files: FileGraph::new(),
        }
    }

    /// Files discovered so far
    pub fn files(&self) -> &FileGraph {
        &self.files
    }

    pub fn into_files(self) -> FileGraph {
        self.files
    }

    /// Discover `path` and, if `include_dependencies` is set, everything it
    /// requires. Dependencies of dependencies are always followed.
    pub fn discover(&mut self, path: impl AsRef<Path>, include_dependencies: bool) -> Result<&FileGraph> {
        let path = Self::root_path(path.as_ref())?;
        self.discover_path(path, include_dependencies)?;
        Ok(&self.files)
    }

    /// Non-blocking version of [`SourceDiscovery::discover`]; yields the same
    /// graph in the same order
    pub async fn discover_async(
        &mut self,
        path: impl AsRef<Path>,
        include_dependencies: bool,
    ) -> Result<&FileGraph> {
        let path = Self::root_path(path.as_ref())?;
        self.discover_path_async(path, include_dependencies).await?;
        Ok(&self.files)
    }

    fn root_path(path: &Path) -> Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(DocwalkError::invalid_argument(
                "missing path of the file to discover",
            ));
        }
        Ok(normalize_path(path))
    }

    fn discover_path(&mut self, path: PathBuf, include_dependencies: bool) -> Result<()> {
        if self.files.contains(&path) {
            return Ok(());
        }

        let bytes = fs::read(&path).map_err(|e| DocwalkError::file_read_error(&path, e))?;
        let source = decode_source(&path, bytes);
        debug!(path = %path.display(), bytes = source.len(), "discovered source file");

        let modules: Vec<String> = if include_dependencies {
            required_modules(&source).into_iter().map(String::from).collect()
        } else {
            Vec::new()
        };
        self.files.insert(path.clone(), source);

        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        for module in modules {
            let Some(dependency) = self.resolve(&directory, &module) else {
                continue;
            };
            self.files.add_dependency(&path, dependency.clone());
            self.discover_path(dependency, true)?;
        }

        Ok(())
    }

    fn discover_path_async<'a>(
        &'a mut self,
        path: PathBuf,
        include_dependencies: bool,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
        Box::pin(async move {
            if self.files.contains(&path) {
                return Ok(());
            }

            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| DocwalkError::file_read_error(&path, e))?;
            let source = decode_source(&path, bytes);
            debug!(path = %path.display(), bytes = source.len(), "discovered source file");

            let modules: Vec<String> = if include_dependencies {
                required_modules(&source).into_iter().map(String::from).collect()
            } else {
                Vec::new()
            };
            self.files.insert(path.clone(), source);

            let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
            for module in modules {
                let Some(dependency) = self.resolve_async(&directory, &module).await else {
                    continue;
                };
                self.files.add_dependency(&path, dependency.clone());
                self.discover_path_async(dependency, true).await?;
            }

            Ok(())
        })
    }

    fn resolve(&self, directory: &Path, module: &str) -> Option<PathBuf> {
        let candidate = normalize_path(&directory.join(module));
        if candidate.is_file() {
            return Some(candidate);
        }

        let with_extension = with_extension_appended(&candidate, &self.options.extension);
        if with_extension.is_file() {
            return Some(with_extension);
        }

        trace!(module, from = %directory.display(), "skipping unresolvable dependency");
        None
    }

    async fn resolve_async(&self, directory: &Path, module: &str) -> Option<PathBuf> {
        let candidate = normalize_path(&directory.join(module));
        if is_file_async(&candidate).await {
            return Some(candidate);
        }

        let with_extension = with_extension_appended(&candidate, &self.options.extension);
        if is_file_async(&with_extension).await {
            return Some(with_extension);
        }

        trace!(module, from = %directory.display(), "skipping unresolvable dependency");
        None
    }
}

/// Source text of a file; invalid UTF-8 sequences become U+FFFD
pub(crate) fn decode_source(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            debug!(path = %path.display(), "replacing invalid UTF-8 in source file");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

async fn is_file_async(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
