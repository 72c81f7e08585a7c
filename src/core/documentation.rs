//! Project documentation orchestrator
//!
//! [`SourceDocumentation`] collects the source files of a project, either by
//! following the dependencies of an entry file or from an explicit list, and
//! analyses every registered file into a [`FileDocumentation`].

use super::discovery::{normalize_path, DiscoveryOptions, SourceDiscovery};
use super::extractor::ClassAnalyzer;
use crate::error::{DocwalkError, Result};
use crate::models::analysis::FileDocumentation;
use crate::models::file_graph::{FileGraph, SourceFile};
use crate::parsers::SourceParser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Creates documentation for all classes of a project
pub struct SourceDocumentation {
    project_root: PathBuf,
    options: DiscoveryOptions,
    files: FileGraph,
    parser: SourceParser,
    analyzer: ClassAnalyzer,
}

impl SourceDocumentation {
    /// Create an orchestrator for the project at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Result<Self> {
        let project_root = project_root.into();
        if project_root.as_os_str().is_empty() {
            return Err(DocwalkError::invalid_argument(
                "missing project root containing the path of the application",
            ));
        }

        Ok(Self {
            project_root: normalize_path(&project_root),
            options: DiscoveryOptions::default(),
            files: FileGraph::new(),
            parser: SourceParser::new(),
            analyzer: ClassAnalyzer::new(),
        })
    }

    /// Use `options` for all following discovery runs
    pub fn with_options(mut self, options: DiscoveryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Registered files in registration order
    pub fn files(&self) -> &FileGraph {
        &self.files
    }

    /// Register `entry` (relative to the project root) and every local file it
    /// requires, directly or indirectly
    pub fn discover_source_files(&mut self, entry: impl AsRef<Path>) -> Result<()> {
        let entry = self.entry_path(entry.as_ref())?;
        let mut discovery = SourceDiscovery::with_options(self.options.clone());
        discovery.discover(&entry, true)?;
        self.register(discovery.into_files());
        Ok(())
    }

    /// Non-blocking version of [`SourceDocumentation::discover_source_files`]
    pub async fn discover_source_files_async(&mut self, entry: impl AsRef<Path>) -> Result<()> {
        let entry = self.entry_path(entry.as_ref())?;
        let mut discovery = SourceDiscovery::with_options(self.options.clone());
        discovery.discover_async(&entry, true).await?;
        self.register(discovery.into_files());
        Ok(())
    }

    /// Register individual files without following their dependencies
    pub fn add_files<I, P>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for file in files {
            let mut discovery = SourceDiscovery::with_options(self.options.clone());
            discovery.discover(file.as_ref(), false)?;
            self.register(discovery.into_files());
        }
        Ok(())
    }

    /// Non-blocking version of [`SourceDocumentation::add_files`]
    pub async fn add_files_async<I, P>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for file in files {
            let mut discovery = SourceDiscovery::with_options(self.options.clone());
            discovery.discover_async(file.as_ref(), false).await?;
            self.register(discovery.into_files());
        }
        Ok(())
    }

    /// Analyse every registered file in registration order
    pub fn analyze(&self) -> Vec<FileDocumentation> {
        let documentation: Vec<FileDocumentation> = self.files.iter().map(|file| self.analyze_file(file)).collect();
        info!(
            files = documentation.len(),
            classes = documentation.iter().map(|file| file.classes.len()).sum::<usize>(),
            "analysed project"
        );
        documentation
    }

    /// Same as [`SourceDocumentation::analyze`]; parsing happens in memory
    pub async fn analyze_async(&self) -> Vec<FileDocumentation> {
        self.analyze()
    }

    /// Parse and analyse one registered file
    pub fn analyze_file(&self, file: &SourceFile) -> FileDocumentation {
        let parsed = self.parser.parse(&file.source, &file.path);
        let classes = self.analyzer.analyze(&parsed.ast, &self.project_root, &file.path);

        FileDocumentation {
            file_name: file.path.clone(),
            source: file.source.clone(),
            ast: parsed.ast,
            classes,
            parse_errors: parsed.parse_errors,
            dependencies: file.dependencies.clone(),
        }
    }

    fn entry_path(&self, entry: &Path) -> Result<PathBuf> {
        if entry.as_os_str().is_empty() {
            return Err(DocwalkError::invalid_argument("missing entry file name"));
        }
        Ok(self.project_root.join(entry))
    }

    fn register(&mut self, discovered: FileGraph) {
        for file in discovered {
            let path = self.relative(&file.path);
            debug!(path = %path.display(), "registering source file");

            self.files.upsert(path.clone(), file.source);
            for dependency in file.dependencies {
                let dependency = self.relative(&dependency);
                self.files.add_dependency(&path, dependency);
            }
        }
    }

    /// `path` relative to the project root when it lies inside it
    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.project_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
