//! Analysis result structures

use super::descriptor::ClassDescriptor;
use super::syntax::SyntaxNode;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Documentation extracted from a single source file
#[derive(Debug, Clone, Serialize)]
pub struct FileDocumentation {
    /// Path as registered, relative to the project root when it was inside it
    pub file_name: PathBuf,
    pub source: String,
    pub ast: SyntaxNode,
    pub classes: Vec<ClassDescriptor>,
    /// Diagnostics of the parser; the classes come from the recovered tree
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parse_errors: Vec<String>,
    /// Local files this file requires
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<PathBuf>,
}

impl FileDocumentation {
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn has_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }
}

/// Find the documentation of a file by its registered name
pub fn find_file<'a>(files: &'a [FileDocumentation], file_name: &Path) -> Option<&'a FileDocumentation> {
    files.iter().find(|file| file.file_name == file_name)
}

/// Complete documentation of a project, as written by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub project_root: PathBuf,
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    pub summary: AnalysisSummary,
    pub files: Vec<FileDocumentation>,
}

impl AnalysisReport {
    pub fn new(project_root: PathBuf, files: Vec<FileDocumentation>, duration: Duration) -> Self {
        let mut summary = AnalysisSummary::from_files(&files);
        summary.analysis_duration = duration;

        Self {
            project_root,
            analyzed_at: chrono::Utc::now(),
            summary,
            files,
        }
    }

    /// All classes of the project in file order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.files.iter().flat_map(|file| file.classes.iter())
    }
}

/// Summary statistics from analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub files: usize,
    pub files_with_errors: usize,
    pub classes: usize,
    pub documented_classes: usize,
    pub methods: usize,
    pub documented_methods: usize,
    pub parameters: usize,
    pub documented_parameters: usize,
    pub analysis_duration: Duration,
}

impl AnalysisSummary {
    pub fn from_files(files: &[FileDocumentation]) -> Self {
        let mut summary = Self {
            files: files.len(),
            ..Self::default()
        };

        for file in files {
            if file.has_errors() {
                summary.files_with_errors += 1;
            }

            for class in &file.classes {
                summary.classes += 1;
                if class.documentation.is_some() {
                    summary.documented_classes += 1;
                }

                for method in &class.methods {
                    summary.methods += 1;
                    if method.documentation.is_some() {
                        summary.documented_methods += 1;
                    }

                    for parameter in &method.parameters {
                        summary.parameters += 1;
                        let documented = parameter.description.is_some()
                            || parameter.values.iter().any(|value| value.description.is_some());
                        if documented {
                            summary.documented_parameters += 1;
                        }
                    }
                }
            }
        }

        summary
    }

    /// Share of documented methods in percent
    pub fn method_coverage(&self) -> f64 {
        if self.methods == 0 {
            return 0.0;
        }
        (self.documented_methods as f64 / self.methods as f64) * 100.0
    }
}
