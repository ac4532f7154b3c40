//! Prompt Service - the render pipeline orchestrator.
//!
//! This service coordinates the fixed render sequence:
//! 1. Registry lookup
//! 2. Latest-version selection (insertion order)
//! 3. Weighted variant sampling
//! 4. Environment overlay
//! 5. Caller placeholder substitution
//! 6. RenderedPrompt assembly with provenance
//!
//! It also exposes thin registry passthroughs so the bootstrap layer can
//! seed and inspect templates through one handle.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{RandomSource, TemplateRegistry},
    domain::{DomainError, PromptTemplate, RenderedPrompt, sampling, substitution},
    error::ForgeResult,
};

/// Renders prompts from registered templates.
///
/// Both collaborators are injected: the registry so tests can run against
/// isolated stores, and the random source so tests can pin the draw and
/// assert the exact variant chosen.
pub struct PromptService {
    registry: Box<dyn TemplateRegistry>,
    random: Box<dyn RandomSource>,
}

impl PromptService {
    /// Create a new prompt service with the given adapters.
    pub fn new(registry: Box<dyn TemplateRegistry>, random: Box<dyn RandomSource>) -> Self {
        Self { registry, random }
    }

    /// Render one prompt.
    ///
    /// # Errors
    ///
    /// `TemplateNotFound` when `name` is absent from the registry — the only
    /// failure of this pipeline for well-formed templates. It propagates
    /// untouched; there is no retry. A template that violates the non-empty
    /// variants convention yields `EmptyVariants` instead of a partial
    /// result.
    #[instrument(skip_all, fields(template = %name, env = %env))]
    pub fn render(
        &self,
        name: &str,
        env: &str,
        placeholders: &BTreeMap<String, String>,
    ) -> ForgeResult<RenderedPrompt> {
        // 1. Lookup
        let template = self
            .registry
            .get(name)?
            .ok_or_else(|| DomainError::TemplateNotFound { name: name.into() })?;

        // 2. Latest version = last element in insertion order (documented
        //    behavior — NOT a semver comparison).
        let version = template
            .latest_version()
            .ok_or_else(|| DomainError::EmptyVariants {
                template: template.name.clone(),
            })?;

        // 3. Weighted draw
        let draw = self.random.draw(version.total_weight());
        let variant = sampling::pick_variant(&version.variants, draw).ok_or_else(|| {
            DomainError::EmptyVariants {
                template: template.name.clone(),
            }
        })?;
        debug!(version = %version.version, variant = %variant.id, "variant sampled");

        let mut content = variant.content.clone();

        // 4. Environment overlay: full replacement first, then merge pairs.
        //    Merge keys the caller also supplies explicitly are left for the
        //    caller's pass — explicit placeholders always win.
        if let Some(overlay) = template.override_for(env) {
            if let Some(replacement) = &overlay.content {
                content = replacement.clone();
            }
            let merge_only: BTreeMap<String, String> = overlay
                .merge
                .iter()
                .filter(|(key, _)| !placeholders.contains_key(*key))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            if !merge_only.is_empty() {
                content = substitution::apply(&content, &merge_only);
            }
        }

        // 5. Caller placeholders last
        if !placeholders.is_empty() {
            content = substitution::apply(&content, placeholders);
        }

        info!(variant = %variant.id, "prompt rendered");

        // 6. Provenance for caller-side audit
        Ok(RenderedPrompt {
            name: template.name.clone(),
            version: version.version.clone(),
            variant: variant.id.clone(),
            env: env.to_string(),
            content,
        })
    }

    // -------------------------------------------------------------------------
    // Registry passthroughs
    // -------------------------------------------------------------------------

    /// Insert or replace a template by name.
    pub fn upsert_template(&self, template: PromptTemplate) -> ForgeResult<()> {
        self.registry.upsert(template)
    }

    /// Fetch a template by name; absence is `Ok(None)`.
    pub fn get_template(&self, name: &str) -> ForgeResult<Option<PromptTemplate>> {
        self.registry.get(name)
    }

    /// Snapshot of all registered templates.
    pub fn list_templates(&self) -> ForgeResult<Vec<PromptTemplate>> {
        self.registry.list()
    }
}
