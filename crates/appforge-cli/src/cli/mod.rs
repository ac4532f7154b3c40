//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appforge",
    bin_name = "appforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Prompt rendering and app scaffolding",
    long_about = "Appforge renders versioned prompt templates and scaffolds \
                  complete application bundles (code, database, infra, docs) \
                  from a single app specification.",
    after_help = "EXAMPLES:\n\
        \x20 appforge render app-brief --env production --var name=Shop\n\
        \x20 appforge generate \"My App\" --description \"demo\" --lang TypeScript\n\
        \x20 appforge templates --format json\n\
        \x20 appforge completions bash > /usr/share/bash-completion/completions/appforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a prompt template.
    #[command(
        visible_alias = "r",
        about = "Render a prompt template",
        after_help = "EXAMPLES:\n\
            \x20 appforge render app-brief\n\
            \x20 appforge render app-brief --env production --var name=Shop --var audience=teams\n\
            \x20 appforge render app-brief --rng-seed 42   # reproducible variant choice"
    )]
    Render(RenderArgs),

    /// Generate a project bundle from an app spec.
    #[command(
        visible_alias = "g",
        about = "Generate a project bundle",
        after_help = "EXAMPLES:\n\
            \x20 appforge generate \"My App\" --description \"demo\" --lang TypeScript\n\
            \x20 appforge generate \"My App\" --json > bundle.json\n\
            \x20 appforge generate \"My App\" --output ./out --dry-run"
    )]
    Generate(GenerateArgs),

    /// List registered prompt templates.
    #[command(
        visible_alias = "ls",
        about = "List prompt templates",
        after_help = "EXAMPLES:\n\
            \x20 appforge templates\n\
            \x20 appforge templates --seed-file ./prompts.toml --format json"
    )]
    Templates(TemplatesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appforge completions bash > ~/.local/share/bash-completion/completions/appforge\n\
            \x20 appforge completions zsh  > ~/.zfunc/_appforge\n\
            \x20 appforge completions fish > ~/.config/fish/completions/appforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `appforge render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template name to render.
    #[arg(value_name = "TEMPLATE", help = "Registered template name")]
    pub template: String,

    /// Target environment for overlay selection.
    #[arg(
        short = 'e',
        long = "env",
        value_name = "ENV",
        help = "Environment whose override to apply (default from config)"
    )]
    pub env: Option<String>,

    /// Placeholder values, repeatable.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        value_parser = parse_var,
        help = "Placeholder value; repeat for multiple keys"
    )]
    pub vars: Vec<(String, String)>,

    /// Additional seed files to register before rendering.
    #[arg(
        long = "seed-file",
        value_name = "FILE",
        help = "TOML seed file to register (repeatable)"
    )]
    pub seed_files: Vec<PathBuf>,

    /// Directory of seed files to register before rendering.
    #[arg(long = "seed-dir", value_name = "DIR", help = "Directory of TOML seed files")]
    pub seed_dir: Option<PathBuf>,

    /// Seed for the variant draw, for reproducible output.
    #[arg(
        long = "rng-seed",
        value_name = "N",
        help = "Fix the RNG seed so the variant choice is reproducible"
    )]
    pub rng_seed: Option<u64>,
}

/// Parse a `KEY=VALUE` pair for `--var`.
fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `appforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Human-readable app name (e.g. "My App").
    #[arg(value_name = "NAME", help = "App name")]
    pub name: String,

    /// App description, embedded in docs and schema.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        default_value = "",
        help = "App description"
    )]
    pub description: String,

    /// Output language. Compared by equality against "TypeScript"; any other
    /// value falls through to JavaScript (permissive, not validating).
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Output language: TypeScript or JavaScript (default from config)"
    )]
    pub language: Option<String>,

    /// Output directory (default: ./<slug>).
    #[arg(short = 'o', long = "output", value_name = "DIR", help = "Output directory")]
    pub output: Option<PathBuf>,

    /// Print the bundle as JSON to stdout instead of writing files.
    #[arg(long = "json", help = "Emit the bundle as JSON instead of writing files")]
    pub json: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and generate immediately")]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing output directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `appforge templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Additional seed files to register before listing.
    #[arg(
        long = "seed-file",
        value_name = "FILE",
        help = "TOML seed file to register (repeatable)"
    )]
    pub seed_files: Vec<PathBuf>,

    /// Directory of seed files to register before listing.
    #[arg(long = "seed-dir", value_name = "DIR", help = "Directory of TOML seed files")]
    pub seed_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TemplatesFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TemplatesFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_render_command() {
        let cli = Cli::parse_from([
            "appforge",
            "render",
            "app-brief",
            "--env",
            "production",
            "--var",
            "name=Shop",
            "--var",
            "audience=teams",
        ]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.template, "app-brief");
                assert_eq!(args.env.as_deref(), Some("production"));
                assert_eq!(args.vars.len(), 2);
                assert_eq!(args.vars[0], ("name".into(), "Shop".into()));
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn var_requires_key_value_shape() {
        assert!(Cli::try_parse_from(["appforge", "render", "t", "--var", "broken"]).is_err());
        assert!(Cli::try_parse_from(["appforge", "render", "t", "--var", "=v"]).is_err());
        // An empty value is fine.
        assert!(Cli::try_parse_from(["appforge", "render", "t", "--var", "k="]).is_ok());
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "appforge",
            "generate",
            "My App",
            "--description",
            "demo",
            "--lang",
            "TypeScript",
            "--yes",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "My App");
                assert_eq!(args.description, "demo");
                assert_eq!(args.language.as_deref(), Some("TypeScript"));
                assert!(args.yes);
                assert!(!args.json);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["appforge", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }

    #[test]
    fn rng_seed_parses_as_u64() {
        let cli = Cli::parse_from(["appforge", "render", "t", "--rng-seed", "42"]);
        if let Commands::Render(args) = cli.command {
            assert_eq!(args.rng_seed, Some(42));
        } else {
            panic!("expected Render command");
        }
    }
}
