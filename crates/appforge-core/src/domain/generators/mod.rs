//! Artifact generators.
//!
//! Four independent pure generators over one [`AppSpec`], plus the
//! [`bundle_all`] orchestrator. The generators share no state and are not
//! composed with one another; each derives the app slug through
//! [`crate::domain::slug::slugify`], which is what guarantees cross-artifact
//! naming consistency.
//!
//! Everything on this path is deterministic: two calls with byte-identical
//! specs produce byte-identical bundles. The deliberate contrast with the
//! prompt pipeline (which samples variants) is that a shipped scaffold must
//! reproduce exactly, while a rendered prompt may vary.

pub mod code;
pub mod db;
pub mod docs;
pub mod infra;

use crate::domain::entities::app_spec::AppSpec;
use crate::domain::entities::bundle::ProjectBundle;

/// The single public orchestration entry point: run all four generators
/// against the same spec and assemble the result.
pub fn bundle_all(spec: &AppSpec) -> ProjectBundle {
    ProjectBundle {
        code: code::generate(spec),
        db: db::generate(&spec.description),
        infra: infra::generate(&spec.name),
        docs: docs::generate(&spec.name, &spec.description),
    }
}
