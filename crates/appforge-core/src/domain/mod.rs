//! Core domain layer for Appforge.
//!
//! Pure business logic with no I/O: the prompt template aggregate, slug
//! derivation, placeholder substitution, weighted variant selection, and the
//! four artifact generators. External concerns (storage, randomness,
//! filesystem) enter only through the ports defined in the application
//! layer.

pub mod entities;
pub mod error;
pub mod generators;
pub mod sampling;
pub mod slug;
pub mod substitution;

// Re-exports for convenience
pub use entities::{
    app_spec::{AppSpec, TargetLanguage},
    bundle::{CodeBundle, DbBundle, DocsBundle, GeneratedFile, InfraBundle, ProjectBundle},
    prompt::{
        EnvOverride, PromptTemplate, PromptTemplateBuilder, PromptVersion, RenderedPrompt, Variant,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use slug::slugify;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn created() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    // ========================================================================
    // Template Aggregate Tests
    // ========================================================================

    #[test]
    fn builder_assembles_full_template() {
        let template = PromptTemplate::builder("app-brief")
            .description("Describes the app to build")
            .tags(vec!["generation".into(), "brief".into()])
            .version(
                PromptVersion::new("1", created())
                    .with_variant(Variant::new("plain", "Build {{name}}."))
                    .with_variant(Variant::new("detailed", "Build {{name}} carefully.").weight(2.0)),
            )
            .environment_override(EnvOverride::new("production").merge("tone", "formal"))
            .build();

        assert_eq!(template.name, "app-brief");
        assert_eq!(template.versions.len(), 1);
        assert_eq!(template.versions[0].variants.len(), 2);
        assert_eq!(template.environment_overrides.len(), 1);
    }

    #[test]
    fn latest_version_is_the_last_appended() {
        let template = PromptTemplate::builder("t")
            .version(PromptVersion::new("1", created()))
            .version(PromptVersion::new("10", created()))
            .version(PromptVersion::new("2", created()))
            .build();

        // Insertion order, not any numeric or semver ordering: "2" wins
        // because it was appended last.
        assert_eq!(template.latest_version().unwrap().version, "2");
    }

    #[test]
    fn latest_version_of_empty_history_is_none() {
        assert!(PromptTemplate::builder("t").build().latest_version().is_none());
    }

    #[test]
    fn override_lookup_is_first_match_by_equality() {
        let template = PromptTemplate::builder("t")
            .environment_override(EnvOverride::new("staging").merge("k", "first"))
            .environment_override(EnvOverride::new("staging").merge("k", "second"))
            .build();

        let overlay = template.override_for("staging").unwrap();
        assert_eq!(overlay.merge.get("k").map(String::as_str), Some("first"));
        assert!(template.override_for("Production").is_none());
    }

    #[test]
    fn default_variant_weight_is_one() {
        let v = Variant::new("a", "text");
        assert_eq!(v.weight, 1.0);
    }

    #[test]
    fn total_weight_sums_fractional_weights() {
        let version = PromptVersion::new("1", created())
            .with_variant(Variant::new("a", "x").weight(0.5))
            .with_variant(Variant::new("b", "y").weight(1.25));
        assert_eq!(version.total_weight(), 1.75);
    }

    // ========================================================================
    // Bundle Tests
    // ========================================================================

    #[test]
    fn bundle_validate_rejects_duplicate_paths() {
        let mut bundle = generators::bundle_all(&AppSpec::new(
            "dup",
            "",
            TargetLanguage::JavaScript,
        ));
        let existing = bundle.code.files[0].clone();
        bundle.code.files.push(existing);

        assert!(matches!(
            bundle.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn duplicate_paths_in_different_lists_are_allowed() {
        // Uniqueness is per bundle list, not bundle-wide.
        let mut bundle =
            generators::bundle_all(&AppSpec::new("dup", "", TargetLanguage::JavaScript));
        let from_code = bundle.code.files[0].clone();
        bundle.infra.ci.push(from_code);

        assert!(bundle.validate().is_ok());
    }
}
