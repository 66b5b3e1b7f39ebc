//! Shell completion generation command.

use clap::Command;
use clap_complete::{Shell, generate};
use fastlocal_core::cli::ExitCode;
use std::io;
use tracing::info;

/// Writes the completion script for `shell` to `out`.
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    info!("Generating {shell} completions");
    generate_completions(shell, cmd, &mut io::stdout());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut cmd = Command::new("test-cli").subcommand(Command::new("read"));
        let mut buf = Vec::new();
        generate_completions(shell, &mut cmd, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_generate_completions_bash() {
        let script = render(Shell::Bash);
        assert!(script.contains("test-cli"));
        assert!(script.contains("read"));
    }

    #[test]
    fn test_generate_completions_other_shells() {
        for shell in [Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            assert!(!render(shell).is_empty());
        }
    }
}
