//! Bundle Service - scaffolding orchestrator.
//!
//! Wraps the pure generators with the one impure concern a CLI needs:
//! materializing a [`ProjectBundle`] onto a filesystem, refusing to clobber
//! an existing output root and rolling back best-effort on partial failure.
//! The pure [`BundleService::bundle`] path never touches I/O.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{AppSpec, ProjectBundle, generators},
    error::ForgeResult,
};

/// Orchestrates artifact generation and (optionally) writing.
pub struct BundleService {
    filesystem: Box<dyn Filesystem>,
}

impl BundleService {
    /// Create a new bundle service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a project bundle. Pure: no I/O, no hidden state, identical
    /// specs yield identical bundles.
    pub fn bundle(&self, spec: &AppSpec) -> ProjectBundle {
        generators::bundle_all(spec)
    }

    /// Generate and materialize under `root` in one step.
    #[instrument(skip_all, fields(app = %spec.name, root = %root.display()))]
    pub fn generate(&self, spec: &AppSpec, root: &Path) -> ForgeResult<ProjectBundle> {
        let bundle = generators::bundle_all(spec);
        info!(files = bundle.file_count(), "bundle generated");
        self.write(&bundle, root)?;
        Ok(bundle)
    }

    /// Write a bundle under `root`, rolling back on failure.
    ///
    /// Layout: code files and tests keep their bundle-relative paths at the
    /// root (they ARE the app); the schema lands at `prisma/schema.prisma`;
    /// docs strings land at `README.md`, `docs/API.md`, and
    /// `docs/ARCHITECTURE.md`. Everything else keeps its bundle path.
    pub fn write(&self, bundle: &ProjectBundle, root: &Path) -> ForgeResult<()> {
        if self.filesystem.exists(root) {
            return Err(ApplicationError::OutputExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(bundle, root) {
            Ok(()) => {
                info!("all bundle files written");
                Ok(())
            }
            Err(e) => {
                warn!("write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    /// Write every entry in the bundle.
    fn write_all(&self, bundle: &ProjectBundle, root: &Path) -> ForgeResult<()> {
        self.filesystem.create_dir_all(root)?;

        let files = bundle
            .code
            .files
            .iter()
            .chain(&bundle.code.tests)
            .chain(&bundle.db.migrations)
            .chain(&bundle.infra.dockerfiles)
            .chain(&bundle.infra.ci)
            .chain(&bundle.infra.terraform);

        for file in files {
            self.write_one(root, &file.path, &file.content)?;
        }

        self.write_one(root, "prisma/schema.prisma", &bundle.db.schema)?;
        self.write_one(root, "README.md", &bundle.docs.readme)?;
        self.write_one(root, "docs/API.md", &bundle.docs.api_docs)?;
        self.write_one(root, "docs/ARCHITECTURE.md", &bundle.docs.architecture)?;

        Ok(())
    }

    fn write_one(&self, root: &Path, rel: &str, content: &str) -> ForgeResult<()> {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "rollback failed"
            );
        } else {
            info!("rollback successful");
        }
    }
}
