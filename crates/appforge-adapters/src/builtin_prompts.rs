//! Built-in prompt templates.
//!
//! These ship compiled into the binary so that `appforge render` works
//! before any seed file exists. They double as reference material for the
//! seed TOML format (see `seed_loader`), and the CLI registers them first so
//! user seeds with the same names overwrite them.

use chrono::{TimeZone, Utc};

use appforge_core::domain::{EnvOverride, PromptTemplate, PromptVersion, Variant};

/// All templates bundled with the binary.
pub fn all_templates() -> Vec<PromptTemplate> {
    vec![app_brief(), release_notes()]
}

/// The primary generation brief handed to the model alongside a scaffold.
///
/// Placeholders: `{{name}}`, `{{description}}`, `{{language}}`.
fn app_brief() -> PromptTemplate {
    PromptTemplate::builder("app-brief")
        .description("Primary brief describing the app to generate")
        .tags(vec!["generation".into(), "brief".into()])
        .version(
            PromptVersion::new("1", Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap())
                .with_variant(
                    Variant::new(
                        "concise",
                        "You are building \"{{name}}\": {{description}}. \
                         Produce a {{language}} implementation that matches the scaffold conventions.",
                    )
                    .weight(3.0),
                )
                .with_variant(
                    Variant::new(
                        "detailed",
                        "You are building \"{{name}}\": {{description}}. \
                         Work through the scaffold step by step, explain each module you touch, \
                         and produce a {{language}} implementation with a {{tone}} register.",
                    )
                    .weight(1.0),
                ),
        )
        .environment_override(
            EnvOverride::new("production")
                .merge("tone", "formal"),
        )
        .environment_override(
            EnvOverride::new("dev")
                .merge("tone", "casual"),
        )
        .build()
}

/// Template for announcing a generated app's first release.
///
/// Placeholders: `{{name}}`, `{{description}}`.
fn release_notes() -> PromptTemplate {
    PromptTemplate::builder("release-notes")
        .description("Announcement copy for a freshly generated app")
        .tags(vec!["docs".into()])
        .version(
            PromptVersion::new("1", Utc.with_ymd_and_hms(2026, 2, 3, 12, 0, 0).unwrap())
                .with_variant(Variant::new(
                    "plain",
                    "Write short release notes for \"{{name}}\" — {{description}}. \
                     Mention the health endpoint and the pricing page.",
                )),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let templates = all_templates();
        let mut names: Vec<_> = templates.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn every_builtin_has_a_live_version_with_variants() {
        for template in all_templates() {
            let version = template
                .latest_version()
                .unwrap_or_else(|| panic!("{} has no versions", template.name));
            assert!(
                !version.variants.is_empty(),
                "{} has an empty variant list",
                template.name
            );
            assert!(version.total_weight() > 0.0);
        }
    }
}
