//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `appforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::PromptTemplate;
use crate::error::ForgeResult;

/// Port for prompt template storage and retrieval.
///
/// Implemented by:
/// - `appforge_adapters::registry::InMemoryRegistry` (process-lifetime map)
///
/// ## Design Notes
///
/// Registries are explicit objects constructed and owned by the caller —
/// there is no ambient global store, so tests can instantiate isolated
/// registries. Lifetime is tied to the owning service instance; nothing is
/// persisted across process restarts (an external store is a collaborator,
/// and templates are re-seeded on every start).
///
/// No structural validation happens at this layer: callers are responsible
/// for supplying well-formed templates.
pub trait TemplateRegistry: Send + Sync {
    /// Insert or replace by `template.name`. Overwrites, never appends.
    fn upsert(&self, template: PromptTemplate) -> ForgeResult<()>;

    /// Fetch a template by name. Absence is `Ok(None)`, not an error.
    fn get(&self, name: &str) -> ForgeResult<Option<PromptTemplate>>;

    /// Snapshot of all templates — a copy, not a live view.
    fn list(&self) -> ForgeResult<Vec<PromptTemplate>>;
}

/// Port for the one nondeterministic step in the render pipeline.
///
/// Implemented by:
/// - `appforge_adapters::random::ThreadRandom` (production)
/// - `appforge_adapters::random::SeededRandom` (reproducible renders, tests)
///
/// Isolating the draw behind a trait lets tests supply a pinned source and
/// assert the exact variant chosen instead of relying on statistical
/// tolerance alone.
pub trait RandomSource: Send + Sync {
    /// Draw a value uniformly from `[0, upper)`.
    ///
    /// Callers pass the total variant weight; implementations may assume
    /// `upper` is finite but must not assume it is positive (a zero-weight
    /// version yields `upper == 0.0`, for which returning `0.0` is expected).
    fn draw(&self, upper: f64) -> f64;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appforge_adapters::filesystem::LocalFilesystem` (production)
/// - `appforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}
