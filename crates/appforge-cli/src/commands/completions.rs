//! Implementation of the `appforge completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as CompletionShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Execute the `appforge completions` command.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "appforge", &mut std::io::stdout());

    Ok(())
}
