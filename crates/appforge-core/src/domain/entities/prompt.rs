//! Prompt template aggregate.
//!
//! A [`PromptTemplate`] is the unit the registry stores: a named family of
//! versioned prompt texts. Each [`PromptVersion`] carries one or more
//! [`Variant`]s that are sampled by weight at render time, and a template may
//! carry [`EnvOverride`]s that patch the sampled text per deployment
//! environment.
//!
//! ## Invariants (by caller convention, NOT enforced here)
//!
//! The registry layer performs no structural validation — callers are
//! responsible for supplying well-formed templates:
//!
//! 1. `versions` is appended in increasing order; the LAST element is
//!    treated as latest (see [`PromptTemplate::latest_version`]).
//! 2. Every version's `variants` list is non-empty.
//! 3. Variant weights sum to a positive value.
//!
//! A template that breaks 2 or 3 produces a degraded render
//! (`DomainError::EmptyVariants`, or an arbitrary pick), never a panic.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, versioned prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Unique registry key. A second upsert under the same name overwrites.
    pub name: String,

    /// Human-readable summary for listing UIs.
    pub description: String,

    /// Free-form tags used for filtering and search.
    pub tags: Vec<String>,

    /// Append-only version history; the last element is the live version.
    pub versions: Vec<PromptVersion>,

    /// Environment-keyed patches, matched by string equality on `env`.
    pub environment_overrides: Vec<EnvOverride>,
}

impl PromptTemplate {
    /// Start the builder pattern for fluent construction.
    pub fn builder(name: impl Into<String>) -> PromptTemplateBuilder {
        PromptTemplateBuilder {
            template: Self {
                name: name.into(),
                description: String::new(),
                tags: Vec::new(),
                versions: Vec::new(),
                environment_overrides: Vec::new(),
            },
        }
    }

    /// The latest version, defined as the LAST element of `versions` in
    /// insertion order.
    ///
    /// This is deliberately not a semantic-version comparison: callers append
    /// versions in increasing order themselves, and re-sorting here would
    /// silently change which variant pool live templates draw from.
    pub fn latest_version(&self) -> Option<&PromptVersion> {
        self.versions.last()
    }

    /// First override whose `env` equals the requested environment.
    pub fn override_for(&self, env: &str) -> Option<&EnvOverride> {
        self.environment_overrides.iter().find(|o| o.env == env)
    }
}

/// Fluent builder for [`PromptTemplate`].
///
/// Construction is infallible: the registry layer does no structural
/// validation, so neither does the builder.
pub struct PromptTemplateBuilder {
    template: PromptTemplate,
}

impl PromptTemplateBuilder {
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.template.description = desc.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.template.tags = tags;
        self
    }

    /// Append a version (accumulates; order is significant).
    pub fn version(mut self, version: PromptVersion) -> Self {
        self.template.versions.push(version);
        self
    }

    /// Append an environment override (accumulates; first match wins).
    pub fn environment_override(mut self, overlay: EnvOverride) -> Self {
        self.template.environment_overrides.push(overlay);
        self
    }

    pub fn build(self) -> PromptTemplate {
        self.template
    }
}

/// One entry in a template's version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptVersion {
    /// Opaque version label (e.g. "3" or "2024-06-01"); never compared.
    pub version: String,

    /// When this version was authored.
    pub created_at: DateTime<Utc>,

    /// Candidate texts, sampled by weight. Non-empty by caller convention.
    pub variants: Vec<Variant>,
}

impl PromptVersion {
    pub fn new(version: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            created_at,
            variants: Vec::new(),
        }
    }

    /// Fluent variant append for builder chains.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Sum of all variant weights. Zero or negative sums are not rejected
    /// anywhere; the draw then degenerates to picking the first variant.
    pub fn total_weight(&self) -> f64 {
        self.variants.iter().map(|v| v.weight).sum()
    }
}

/// One candidate rendering of a prompt version.
///
/// Selection probability is `weight / total_weight` of the owning version.
/// Weights may be fractional; the default is 1.0 (uniform among defaulted
/// variants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,

    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Prompt text with `{{key}}` placeholder tokens.
    pub content: String,
}

fn default_weight() -> f64 {
    1.0
}

impl Variant {
    /// Create a variant with the default weight of 1.0.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: 1.0,
            content: content.into(),
        }
    }

    /// Override the sampling weight (fractional values allowed).
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Environment-keyed patch applied after variant sampling.
///
/// If `content` is present it replaces the sampled text wholesale; then,
/// whether or not `content` fired, each `merge` pair substitutes its
/// `{{key}}` token with a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvOverride {
    /// Environment key, matched by equality (e.g. "production").
    pub env: String,

    /// Optional full replacement text.
    #[serde(default)]
    pub content: Option<String>,

    /// Key → literal substitutions into whatever content is active.
    #[serde(default)]
    pub merge: BTreeMap<String, String>,
}

impl EnvOverride {
    pub fn new(env: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            content: None,
            merge: BTreeMap::new(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn merge(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.merge.insert(key.into(), value.into());
        self
    }
}

/// The fully resolved output of one render call.
///
/// Besides the resolved `content`, this carries enough provenance (template
/// name, version label, variant id, environment) for the caller to audit
/// which path through the pipeline produced a given prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPrompt {
    pub name: String,
    pub version: String,
    pub variant: String,
    pub env: String,
    pub content: String,
}
