//! Generated artifact bundles.
//!
//! These types are the output side of the scaffolding engine: plain data, no
//! behavior beyond validation. File paths are POSIX-relative and form the
//! verbatim contract a downstream packager must honor.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::error::DomainError;

/// One generated file: a relative path and its full text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// POSIX-relative path, unique within the owning bundle's file list.
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Application source files plus their test stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBundle {
    /// Slugified app name, mirrored in the generated `package.json`.
    pub name: String,
    pub files: Vec<GeneratedFile>,
    pub tests: Vec<GeneratedFile>,
}

/// Database schema plus migration stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbBundle {
    /// Full schema text (single entity model).
    pub schema: String,
    pub migrations: Vec<GeneratedFile>,
}

/// Container, CI, and Terraform definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfraBundle {
    pub dockerfiles: Vec<GeneratedFile>,
    pub ci: Vec<GeneratedFile>,
    pub terraform: Vec<GeneratedFile>,
}

/// Human-facing documentation strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsBundle {
    pub readme: String,
    pub api_docs: String,
    pub architecture: String,
}

/// The four-layer output produced for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBundle {
    pub code: CodeBundle,
    pub db: DbBundle,
    pub infra: InfraBundle,
    pub docs: DocsBundle,
}

impl ProjectBundle {
    /// Check path uniqueness within each bundle's own file list.
    ///
    /// The generators are structurally fixed and always satisfy this; the
    /// check exists so tests (and future dynamic generators) can assert the
    /// invariant mechanically.
    pub fn validate(&self) -> Result<(), DomainError> {
        for list in self.file_lists() {
            let mut seen = HashSet::new();
            for file in list {
                if !seen.insert(file.path.as_str()) {
                    return Err(DomainError::DuplicatePath {
                        path: file.path.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Total number of generated files across all four layers.
    pub fn file_count(&self) -> usize {
        self.file_lists().map(|l| l.len()).sum()
    }

    fn file_lists(&self) -> impl Iterator<Item = &Vec<GeneratedFile>> {
        [
            &self.code.files,
            &self.code.tests,
            &self.db.migrations,
            &self.infra.dockerfiles,
            &self.infra.ci,
            &self.infra.terraform,
        ]
        .into_iter()
    }
}
