//! Implementation of the `appforge generate` command.
//!
//! Responsibility: translate CLI arguments into an `AppSpec`, call the core
//! bundle service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use appforge_adapters::LocalFilesystem;
use appforge_core::{
    application::BundleService,
    domain::{AppSpec, ProjectBundle, TargetLanguage, slugify},
    error::ForgeError,
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `appforge generate` command.
///
/// Dispatch sequence:
/// 1. Build the `AppSpec` (permissive language mapping)
/// 2. `--json`: emit the bundle to stdout and stop
/// 3. Resolve and validate the output directory
/// 4. `--dry-run`: describe without writing
/// 5. Confirm with the user unless `--yes` or `--quiet`
/// 6. Generate and write via `BundleService`
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build spec. The language string is compared against the one literal
    //    inside TargetLanguage::from; anything unexpected means JavaScript.
    let language_str = args
        .language
        .unwrap_or_else(|| config.defaults.language.clone());
    let language = TargetLanguage::from(language_str.as_str());
    let spec = AppSpec::new(&args.name, &args.description, language);

    debug!(language = %language, "spec assembled");

    let service = BundleService::new(Box::new(LocalFilesystem::new()));

    // 2. JSON mode: the bundle is the artifact; print and stop.
    if args.json {
        let bundle = service.bundle(&spec);
        let json = serde_json::to_string_pretty(&bundle).map_err(|e| {
            CliError::Core(ForgeError::Internal {
                message: format!("cannot serialize bundle: {e}"),
            })
        })?;
        println!("{json}");
        return Ok(());
    }

    // 3. Output directory defaults to ./<slug>.
    let slug = slugify(&spec.name);
    let root = match args.output {
        Some(dir) => dir,
        None if slug.is_empty() => {
            return Err(CliError::InvalidInput {
                message: format!("cannot derive a directory name from '{}'", spec.name),
            });
        }
        None => PathBuf::from(&slug),
    };

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let bundle = service.bundle(&spec);
        describe(&bundle, &root, &output)?;
        return Ok(());
    }

    // 5. Confirm.
    if !global.quiet && !args.yes {
        output.header(&format!("Generating '{}'", spec.name))?;
        output.print(&format!("  Language: {language}"))?;
        output.print(&format!("  Output:   {}", root.display()))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Existing output handling.
    if root.exists() {
        if args.force {
            output.warning(&format!("overwriting existing {}", root.display()))?;
            std::fs::remove_dir_all(&root)?;
        } else {
            return Err(CliError::OutputExists { path: root });
        }
    }

    info!(root = %root.display(), "generation started");
    let bundle = service.generate(&spec, &root).map_err(CliError::Core)?;

    output.success(&format!(
        "Generated '{}' ({} files) at {}",
        spec.name,
        bundle.file_count() + 4, // plus schema and the three docs strings
        root.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn describe(bundle: &ProjectBundle, root: &std::path::Path, out: &OutputManager) -> CliResult<()> {
    out.info(&format!("Dry run: would create under {}", root.display()))?;
    out.print(&format!(
        "  code:      {} files + {} tests",
        bundle.code.files.len(),
        bundle.code.tests.len()
    ))?;
    out.print(&format!(
        "  db:        schema + {} migrations",
        bundle.db.migrations.len()
    ))?;
    out.print(&format!(
        "  infra:     {} files",
        bundle.infra.dockerfiles.len() + bundle.infra.ci.len() + bundle.infra.terraform.len()
    ))?;
    out.print("  docs:      README.md, docs/API.md, docs/ARCHITECTURE.md")?;
    out.print("")?;
    for file in bundle.code.files.iter().chain(&bundle.code.tests) {
        out.print(&format!("  {}", file.path))?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
