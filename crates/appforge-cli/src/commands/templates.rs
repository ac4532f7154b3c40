//! Implementation of the `appforge templates` command.

use tracing::instrument;

use appforge_core::{application::ports::TemplateRegistry, error::ForgeError};

use crate::{
    cli::{TemplatesArgs, TemplatesFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `appforge templates` command.
#[instrument(skip_all)]
pub fn execute(
    args: TemplatesArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let registry = super::seed_registry(&config, &args.seed_files, args.seed_dir.as_ref())?;

    let mut templates = registry.list()?;
    templates.sort_by(|a, b| a.name.cmp(&b.name));

    match args.format {
        TemplatesFormat::Json => {
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::Core(ForgeError::Internal {
                    message: format!("cannot serialize templates: {e}"),
                })
            })?;
            println!("{json}");
        }

        TemplatesFormat::List => {
            for template in &templates {
                println!("{}", template.name);
            }
        }

        TemplatesFormat::Table => {
            output.header(&format!("Available templates ({})", templates.len()))?;
            for template in &templates {
                let version = template
                    .latest_version()
                    .map(|v| v.version.as_str())
                    .unwrap_or("-");
                let variants = template
                    .latest_version()
                    .map(|v| v.variants.len())
                    .unwrap_or(0);
                let envs: Vec<&str> = template
                    .environment_overrides
                    .iter()
                    .map(|o| o.env.as_str())
                    .collect();

                output.print(&format!(
                    "  {:<16} v{:<6} {} variant(s)  envs: {}",
                    template.name,
                    version,
                    variants,
                    if envs.is_empty() {
                        "-".to_string()
                    } else {
                        envs.join(", ")
                    }
                ))?;
                if !template.description.is_empty() {
                    output.print(&format!("    {}", template.description))?;
                }
            }
        }
    }

    Ok(())
}
