//! TOML seed loader.
//!
//! Templates live only in process memory; an external bootstrap step must
//! (re-)seed the registry on every start. This module parses that bootstrap
//! input: TOML documents describing prompt templates, either a single file
//! or a directory of `*.toml` files.
//!
//! # Seed document format
//!
//! ```toml
//! [[templates]]
//! name        = "app-brief"
//! description = "Primary generation brief"
//! tags        = ["generation"]
//!
//! [[templates.versions]]
//! version    = "1"
//! created_at = "2026-06-01T00:00:00Z"   # RFC 3339, quoted
//!
//! [[templates.versions.variants]]
//! id      = "plain"
//! weight  = 1.0                          # optional, defaults to 1.0
//! content = "Build {{name}}."
//!
//! [[templates.environment_overrides]]
//! env     = "production"
//! content = "Build {{name}}, production grade."   # optional full replacement
//!
//! [templates.environment_overrides.merge]         # optional merge pairs
//! tone = "formal"
//! ```
//!
//! Version order in the document is preserved verbatim — the LAST version
//! listed becomes the live one, exactly as with programmatic registration.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use appforge_core::{
    application::ApplicationError,
    domain::{EnvOverride, PromptTemplate, PromptVersion, Variant},
    error::ForgeResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialized representation of one seed document.
#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

#[derive(Debug, Deserialize)]
struct TemplateEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    versions: Vec<VersionEntry>,
    #[serde(default)]
    environment_overrides: Vec<OverrideEntry>,
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    version: String,
    /// RFC 3339 timestamp as a quoted string.
    created_at: String,
    #[serde(default)]
    variants: Vec<VariantEntry>,
}

#[derive(Debug, Deserialize)]
struct VariantEntry {
    id: String,
    weight: Option<f64>,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OverrideEntry {
    env: String,
    content: Option<String>,
    #[serde(default)]
    merge: BTreeMap<String, String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one TOML seed document.
pub fn load_str(input: &str) -> ForgeResult<Vec<PromptTemplate>> {
    let doc: SeedDocument = toml::from_str(input).map_err(|e| ApplicationError::SeedFailed {
        reason: format!("invalid seed TOML: {e}"),
    })?;

    doc.templates.into_iter().map(convert_template).collect()
}

/// Read and parse one seed file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>) -> ForgeResult<Vec<PromptTemplate>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| ApplicationError::SeedFailed {
        reason: format!("cannot read {}: {e}", path.display()),
    })?;
    load_str(&input)
}

/// Walk a directory and load every `*.toml` file found.
///
/// Individual files that fail to parse are skipped with a WARN rather than
/// aborting the whole seed pass; a directory that cannot be read at all is
/// an error.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_dir(dir: impl AsRef<Path>) -> ForgeResult<Vec<PromptTemplate>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ApplicationError::SeedFailed {
            reason: format!("not a directory: {}", dir.display()),
        }
        .into());
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ApplicationError::SeedFailed {
            reason: format!("cannot walk {}: {e}", dir.display()),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_none_or(|ext| ext != "toml") {
            continue;
        }

        match load_file(entry.path()) {
            Ok(mut loaded) => {
                debug!(path = %entry.path().display(), count = loaded.len(), "seed file loaded");
                templates.append(&mut loaded);
            }
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping unparsable seed file");
            }
        }
    }

    Ok(templates)
}

// ── Conversion ────────────────────────────────────────────────────────────────

fn convert_template(entry: TemplateEntry) -> ForgeResult<PromptTemplate> {
    let mut builder = PromptTemplate::builder(entry.name)
        .description(entry.description)
        .tags(entry.tags);

    for version in entry.versions {
        builder = builder.version(convert_version(version)?);
    }

    for overlay in entry.environment_overrides {
        let mut converted = EnvOverride::new(overlay.env);
        if let Some(content) = overlay.content {
            converted = converted.content(content);
        }
        for (key, value) in overlay.merge {
            converted = converted.merge(key, value);
        }
        builder = builder.environment_override(converted);
    }

    Ok(builder.build())
}

fn convert_version(entry: VersionEntry) -> ForgeResult<PromptVersion> {
    let created_at: DateTime<Utc> = entry
        .created_at
        .parse::<DateTime<Utc>>()
        .map_err(|e| ApplicationError::SeedFailed {
            reason: format!(
                "version '{}' has invalid created_at '{}': {e}",
                entry.version, entry.created_at
            ),
        })?;

    let mut version = PromptVersion::new(entry.version, created_at);
    for variant in entry.variants {
        let mut converted = Variant::new(variant.id, variant.content);
        if let Some(weight) = variant.weight {
            converted = converted.weight(weight);
        }
        version = version.with_variant(converted);
    }

    Ok(version)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
[[templates]]
name        = "app-brief"
description = "Primary brief"
tags        = ["generation", "brief"]

[[templates.versions]]
version    = "1"
created_at = "2026-01-15T09:00:00Z"

[[templates.versions.variants]]
id      = "plain"
content = "Build {{name}}."

[[templates.versions.variants]]
id      = "detailed"
weight  = 2.5
content = "Build {{name}} with care."

[[templates.environment_overrides]]
env     = "production"
content = "Build {{name}}, production grade."

[templates.environment_overrides.merge]
tone = "formal"
"#;

    #[test]
    fn parses_a_full_template() {
        let templates = load_str(SEED).unwrap();
        assert_eq!(templates.len(), 1);

        let t = &templates[0];
        assert_eq!(t.name, "app-brief");
        assert_eq!(t.tags, vec!["generation", "brief"]);

        let version = t.latest_version().unwrap();
        assert_eq!(version.version, "1");
        assert_eq!(version.variants.len(), 2);
        assert_eq!(version.variants[0].weight, 1.0); // default
        assert_eq!(version.variants[1].weight, 2.5);

        let overlay = t.override_for("production").unwrap();
        assert_eq!(overlay.content.as_deref(), Some("Build {{name}}, production grade."));
        assert_eq!(overlay.merge.get("tone").map(String::as_str), Some("formal"));
    }

    #[test]
    fn version_order_is_preserved() {
        let seed = r#"
[[templates]]
name = "t"

[[templates.versions]]
version    = "old"
created_at = "2026-01-01T00:00:00Z"

[[templates.versions]]
version    = "live"
created_at = "2026-02-01T00:00:00Z"
"#;
        let templates = load_str(seed).unwrap();
        assert_eq!(templates[0].latest_version().unwrap().version, "live");
    }

    #[test]
    fn invalid_toml_is_seed_failed() {
        let err = load_str("not [ valid").unwrap_err();
        assert!(err.to_string().contains("Seeding templates failed"));
    }

    #[test]
    fn invalid_timestamp_is_seed_failed() {
        let seed = r#"
[[templates]]
name = "t"

[[templates.versions]]
version    = "1"
created_at = "yesterday"
"#;
        assert!(load_str(seed).is_err());
    }

    #[test]
    fn load_dir_collects_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), SEED).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not [ valid").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "not a seed").unwrap();

        let templates = load_dir(dir.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "app-brief");
    }

    #[test]
    fn load_dir_on_missing_path_is_an_error() {
        assert!(load_dir("/definitely/not/here").is_err());
    }
}
