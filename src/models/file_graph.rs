//! File graph produced by source discovery

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A discovered source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Path as resolved by discovery
    pub path: PathBuf,
    /// Raw source text
    pub source: String,
    /// Local files this file includes, in the order their inclusion calls appear
    pub dependencies: Vec<PathBuf>,
}

/// Insertion-ordered map of path to source file
///
/// The graph doubles as the visited set of the discovery walk: a path is
/// inserted at most once and its entry is never replaced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileGraph {
    files: Vec<SourceFile>,
    #[serde(skip)]
    index: HashMap<PathBuf, usize>,
}

impl FileGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    /// Insert a file; returns false and leaves the graph untouched when the path
    /// is already present
    pub fn insert(&mut self, path: PathBuf, source: String) -> bool {
        if self.index.contains_key(&path) {
            return false;
        }

        self.index.insert(path.clone(), self.files.len());
        self.files.push(SourceFile {
            path,
            source,
            dependencies: Vec::new(),
        });
        true
    }

    /// Insert a file, or replace the source of a known one in place
    pub fn upsert(&mut self, path: PathBuf, source: String) {
        match self.index.get(&path) {
            Some(&position) => self.files[position].source = source,
            None => {
                self.insert(path, source);
            }
        }
    }

    /// Record that `from` includes `to`
    pub fn add_dependency(&mut self, from: &Path, to: PathBuf) {
        if let Some(&position) = self.index.get(from) {
            let file = &mut self.files[position];
            if !file.dependencies.contains(&to) {
                file.dependencies.push(to);
            }
        }
    }

    pub fn get(&self, path: &Path) -> Option<&SourceFile> {
        self.index.get(path).map(|&position| &self.files[position])
    }

    /// Source text of a file
    pub fn source(&self, path: &Path) -> Option<&str> {
        self.get(path).map(|file| file.source.as_str())
    }

    /// Files included by `path`
    pub fn dependencies_of(&self, path: &Path) -> &[PathBuf] {
        self.get(path)
            .map(|file| file.dependencies.as_slice())
            .unwrap_or_default()
    }

    /// Paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|file| file.path.as_path())
    }

    /// Files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl IntoIterator for FileGraph {
    type Item = SourceFile;
    type IntoIter = std::vec::IntoIter<SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
