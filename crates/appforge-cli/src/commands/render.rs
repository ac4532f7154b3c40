//! Implementation of the `appforge render` command.
//!
//! Responsibility: seed a registry, wire the prompt service, render, and
//! display the result. No business logic lives here.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use appforge_adapters::{SeededRandom, ThreadRandom};
use appforge_core::{
    application::{PromptService, ports::RandomSource},
    error::ForgeError,
};

use crate::{
    cli::{OutputFormat, RenderArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `appforge render` command.
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: RenderArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let registry = super::seed_registry(&config, &args.seed_files, args.seed_dir.as_ref())?;

    // A fixed seed makes the variant draw reproducible run to run.
    let random: Box<dyn RandomSource> = match args.rng_seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    let service = PromptService::new(Box::new(registry), random);

    let env = args.env.unwrap_or_else(|| config.defaults.env.clone());
    let placeholders: BTreeMap<String, String> = args.vars.into_iter().collect();
    debug!(env = %env, placeholders = placeholders.len(), "rendering");

    let rendered = service
        .render(&args.template, &env, &placeholders)
        .map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&rendered).map_err(|e| {
            CliError::Core(ForgeError::Internal {
                message: format!("cannot serialize rendered prompt: {e}"),
            })
        })?;
        println!("{json}");
        return Ok(());
    }

    output.info(&format!(
        "{} @ {} · variant '{}' · env '{}'",
        rendered.name, rendered.version, rendered.variant, rendered.env
    ))?;

    // The content itself goes straight to stdout — it is the artifact, and
    // must survive --quiet and redirection.
    println!("{}", rendered.content);

    Ok(())
}
