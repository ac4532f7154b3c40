//! Command handlers.
//!
//! Each submodule owns one subcommand. The shared [`seed_registry`] helper
//! implements the bootstrap step the core leaves external: every invocation
//! builds a fresh in-memory registry and seeds it before use.

pub mod completions;
pub mod generate;
pub mod render;
pub mod templates;

use std::path::PathBuf;

use tracing::debug;

use appforge_adapters::{InMemoryRegistry, builtin_prompts, seed_loader};
use appforge_core::application::ports::TemplateRegistry;

use crate::{config::AppConfig, error::CliResult};

/// Build a freshly seeded registry.
///
/// Seed order: built-ins, then config-declared sources, then command-line
/// sources. Later sources overwrite earlier ones by template name, so user
/// seeds shadow the built-ins.
pub(crate) fn seed_registry(
    config: &AppConfig,
    seed_files: &[PathBuf],
    seed_dir: Option<&PathBuf>,
) -> CliResult<InMemoryRegistry> {
    let registry = InMemoryRegistry::new();

    for template in builtin_prompts::all_templates() {
        registry.upsert(template)?;
    }

    if let Some(dir) = config.seeds.dir.as_ref() {
        register_all(&registry, seed_loader::load_dir(dir)?)?;
    }
    for file in &config.seeds.files {
        register_all(&registry, seed_loader::load_file(file)?)?;
    }

    if let Some(dir) = seed_dir {
        register_all(&registry, seed_loader::load_dir(dir)?)?;
    }
    for file in seed_files {
        register_all(&registry, seed_loader::load_file(file)?)?;
    }

    debug!(count = registry.len(), "registry seeded");
    Ok(registry)
}

fn register_all(
    registry: &InMemoryRegistry,
    templates: Vec<appforge_core::domain::PromptTemplate>,
) -> CliResult<()> {
    for template in templates {
        registry.upsert(template)?;
    }
    Ok(())
}
